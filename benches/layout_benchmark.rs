//! Benchmarks for unscan layout reconstruction.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic hOCR pages laid out like a typical
//! letter-size scan: a title line followed by body lines of fixed height.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates synthetic hOCR with the given number of pages.
fn create_test_hocr(page_count: usize, lines_per_page: u32) -> String {
    let mut content = String::from("<html><body>");

    for page in 0..page_count {
        content.push_str(&format!(
            "<div class='ocr_page' id='page_{}' title='bbox 0 0 2550 3300'>",
            page + 1
        ));

        // Title line, centered and tall
        content.push_str(&format!(
            "<span class='ocrx_word' title='bbox 900 60 1400 120'><strong>Page {}</strong></span>",
            page + 1
        ));

        for line in 0..lines_per_page {
            let y = 160 + line * 40;
            // Every tenth line leaves a paragraph gap
            let y = y + (line / 10) * 40;
            for word in 0..12u32 {
                let x = 40 + word * 90;
                content.push_str(&format!(
                    "<span class='ocrx_word' title='bbox {} {} {} {}; x_wconf 95'>word{}</span>",
                    x,
                    y + word % 3,
                    x + 80,
                    y + 24 + word % 3,
                    word
                ));
            }
        }

        content.push_str("</div>");
    }

    content.push_str("</body></html>");
    content
}

/// Benchmark word extraction alone.
fn bench_extraction(c: &mut Criterion) {
    let hocr = create_test_hocr(1, 60);

    c.bench_function("extract_words", |b| {
        b.iter(|| unscan::extract_words(black_box(&hocr)));
    });
}

/// Benchmark the full pipeline at various sizes.
fn bench_reconstruction(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruction");

    for page_count in [1, 5, 20].iter() {
        let hocr = create_test_hocr(*page_count, 60);

        group.bench_function(format!("{}_pages_parallel", page_count), |b| {
            b.iter(|| unscan::reconstruct_hocr(black_box(&hocr)).unwrap());
        });

        group.bench_function(format!("{}_pages_sequential", page_count), |b| {
            let options = unscan::LayoutOptions::new().sequential();
            b.iter(|| unscan::reconstruct_hocr_with_options(black_box(&hocr), &options).unwrap());
        });
    }

    group.finish();
}

/// Benchmark markdown parsing and rendering round trip.
fn bench_markdown(c: &mut Criterion) {
    let text: String = (0..200)
        .map(|i| {
            if i % 20 == 0 {
                format!("## Section {}\n", i / 20)
            } else {
                format!("Line {} with **bold** and plain text.\n", i)
            }
        })
        .collect();
    let options = unscan::RenderOptions::default();

    c.bench_function("markdown_round_trip", |b| {
        b.iter(|| {
            let doc = unscan::parse_markdown(black_box(&text)).unwrap();
            unscan::render::to_markdown(&doc, &options).unwrap()
        });
    });
}

criterion_group!(benches, bench_extraction, bench_reconstruction, bench_markdown);
criterion_main!(benches);
