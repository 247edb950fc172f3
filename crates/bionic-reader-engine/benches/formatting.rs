use bionic_reader_engine::{
    FixationControl, FormatSettings, HtmlRenderer, Intensity, Renderer, format,
};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    let content = common::generate_document(100);

    for control in [FixationControl::Bold, FixationControl::Highlight, FixationControl::Off] {
        let settings = FormatSettings {
            fixation_control: control,
            ..FormatSettings::default()
        };
        group.bench_function(format!("format_{control:?}"), |b| {
            b.iter(|| format(std::hint::black_box(&content), Intensity::default(), settings));
        });
    }

    let doc = format(&content, Intensity::default(), FormatSettings::default());
    group.bench_function("render_html", |b| {
        b.iter(|| HtmlRenderer.render(std::hint::black_box(&doc)));
    });

    group.finish();
}

criterion_group!(benches, bench_format);
criterion_main!(benches);
