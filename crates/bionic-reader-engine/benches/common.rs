// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_document(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str("INTRODUCTION\n");
        content.push_str(
            "Some paragraph content with multiple sentences. This helps create realistic document structure for benchmarking.\n",
        );
        for i in 0..3 {
            content.push_str(&format!("- bullet point number {i}\n"));
        }
        content.push_str("short line\n\n");
    }

    content
}
