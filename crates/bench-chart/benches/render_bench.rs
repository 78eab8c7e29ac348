use anyhow::Result;
use bench_chart::{render_to_png_bytes, BarChart, ChartSpec, Dataset, RenderOptions, Theme};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_table(n: usize, dual: bool) -> String {
    let mut text = String::new();
    for i in 0..n {
        let tput = 1_000_000.0 / (i as f64 + 1.0);
        if dual {
            text.push_str(&format!("gen-{i},{tput},{}\n", 1024 * (i % 7 + 1)));
        } else {
            text.push_str(&format!("gen-{i},{tput}\n"));
        }
    }
    text
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[8usize, 64usize] {
        for &dual in &[false, true] {
            let ds = Dataset::from_reader(build_table(n, dual).as_bytes()).expect("table");
            let spec = ChartSpec::for_dataset(&ds, None).expect("spec");
            let chart = BarChart::build(&ds, &spec, "json generator benchmark", &Theme::light()).expect("chart");
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            let name = if dual { format!("dual_{n}") } else { format!("single_{n}") };
            group.bench_function(name, |b| {
                b.iter(|| -> Result<()> {
                    let bytes = render_to_png_bytes(&chart, &opts)?;
                    black_box(bytes);
                    Ok(())
                });
            });
        }
    }
    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let text = build_table(1_000, true);
    c.bench_function("load_table_1000", |b| {
        b.iter(|| black_box(Dataset::from_reader(text.as_bytes()).expect("table")));
    });
}

criterion_group!(benches, bench_render, bench_load);
criterion_main!(benches);
