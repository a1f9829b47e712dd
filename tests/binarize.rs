mod common;

use common::synthetic_image::{dark_spot_page, random_page, uniform_page};
use page_binarize::stats::{windowed_mean, windowed_std_dev};
use page_binarize::threshold::{apply_thresholds, sauvola_threshold};
use page_binarize::{diff, BinarizeParams, Binarizer, StatsStrategy};

#[test]
fn single_dark_pixel_survives_binarization() {
    let (w, h) = (16, 16);
    let (x, y) = (8, 8);
    let page = dark_spot_page(w, h, x, y);

    let mean = windowed_mean(&page, 5);
    // the 5×5 window at the spot averages 24 white pixels and one black one
    let expected = (255.0 * 25.0 - 255.0) / 25.0;
    assert!((mean.get(0, 0) - 255.0).abs() < 1e-4);
    assert!((mean.get(x, y) - expected).abs() < 1e-4);

    let std_dev = windowed_std_dev(&page, &mean, 5);
    let thresholds = sauvola_threshold(&mean, &std_dev, 0.25);
    let binary = apply_thresholds(&page, &thresholds);

    assert!((binary.get(0, 0) - 255.0).abs() < 1e-4);
    assert!(binary.get(x, y).abs() < 1e-4);
}

#[test]
fn pipeline_darkens_the_spot_with_both_strategies() {
    let page = dark_spot_page(16, 16, 8, 8);

    for strategy in [StatsStrategy::Direct, StatsStrategy::Integral] {
        let binarizer = Binarizer::new(BinarizeParams {
            window_size: 5,
            sauvola_factor: 0.25,
            strategy,
        });
        let output = binarizer.process(&page);

        assert_eq!(output.image.get(0, 0), 255.0, "{strategy:?}: corner flipped");
        assert_eq!(output.image.get(8, 8), 0.0, "{strategy:?}: spot lost");
        assert!(output.report.total_ms >= output.report.threshold_ms);
    }
}

#[test]
fn pipeline_output_is_strictly_black_or_white() {
    let page = random_page(64, 48, 0xB17E5);
    let output = Binarizer::new(BinarizeParams::default()).process(&page);
    assert!(output
        .image
        .data
        .iter()
        .all(|&v| v == 0.0 || v == 255.0));
}

#[test]
fn strategies_agree_on_a_noisy_page() {
    let page = random_page(40, 32, 99);
    let direct = Binarizer::new(BinarizeParams {
        window_size: 7,
        sauvola_factor: 0.3,
        strategy: StatsStrategy::Direct,
    })
    .process(&page);
    let fast = Binarizer::new(BinarizeParams {
        window_size: 7,
        sauvola_factor: 0.3,
        strategy: StatsStrategy::Integral,
    })
    .process(&page);

    // binarization quantizes away the small numeric gap between the paths,
    // so disagreement is confined to pixels sitting right on a threshold
    let disagreeing = direct
        .image
        .data
        .iter()
        .zip(&fast.image.data)
        .filter(|(a, b)| a != b)
        .count();
    let total = page.data.len();
    assert!(
        disagreeing * 100 < total,
        "{disagreeing}/{total} pixels disagree between strategies"
    );
}

#[test]
fn diff_flags_the_edited_region_only() {
    let original = uniform_page(32, 32, 255.0);
    let mut edited = original.clone();
    for y in 10..14 {
        for x in 10..14 {
            edited.set(x, y, 0.0);
        }
    }

    let result = diff(&original, &edited, 20.0);
    assert_eq!(result.get(11, 11), 255.0);
    assert_eq!(result.get(0, 0), 0.0);
    assert_eq!(result.get(31, 31), 0.0);
}

#[test]
fn diff_of_a_page_with_itself_is_empty() {
    let page = random_page(32, 24, 3);
    let result = diff(&page, &page, 1.0);
    assert!(result.data.iter().all(|&v| v == 0.0));
}
