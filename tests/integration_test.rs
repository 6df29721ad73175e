//! Integration tests for the complete analysis pipelines
//!
//! These tests validate the end-to-end workflows over synthetic images and
//! deterministic fake detectors:
//! - Skin tone estimation and tone matching
//! - Dominant color extraction and named color classification
//! - Error handling for degenerate inputs

use image::{GrayImage, Rgb, RgbImage};
use tryon_colors::{
    analyze_garment, garment_record, match_skin_tone, match_tone, AnalysisError, DetectionParams,
    DominantColorExtractor, FaceDetector, FaceRegion, NamedPalette, SkinToneEstimator,
    ToneCatalog, ToneCatalogEntry,
};

/// Deterministic detector returning a fixed list of regions
struct FixedDetector(Vec<FaceRegion>);

impl FaceDetector for FixedDetector {
    fn detect(
        &self,
        _image: &GrayImage,
        _params: &DetectionParams,
    ) -> Result<Vec<FaceRegion>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.0.clone())
    }
}

fn reference_catalog() -> ToneCatalog {
    ToneCatalog::new(vec![
        ToneCatalogEntry {
            skin_tone: "fair".into(),
            ita: 45.0,
        },
        ToneCatalogEntry {
            skin_tone: "medium".into(),
            ita: 20.0,
        },
        ToneCatalogEntry {
            skin_tone: "dark".into(),
            ita: -10.0,
        },
    ])
}

/// Portrait-like image: a skin colored block on a dark backdrop
fn portrait(skin: [u8; 3]) -> (RgbImage, FaceRegion) {
    let mut image = RgbImage::from_pixel(120, 120, Rgb([12, 12, 14]));
    let face = FaceRegion::new(30, 20, 60, 70);
    for y in face.y..face.y + face.height {
        for x in face.x..face.x + face.width {
            image.put_pixel(x, y, Rgb(skin));
        }
    }
    (image, face)
}

// ============================================================================
// Skin Tone Pipeline
// ============================================================================

#[test]
fn test_skin_tone_end_to_end() {
    let (image, face) = portrait([200, 160, 140]);
    let estimator = SkinToneEstimator::new(FixedDetector(vec![face]));

    let result = match_skin_tone(&image, &estimator, &reference_catalog()).unwrap();

    assert!(result.ita.is_finite());
    assert!(result.ita > -90.0 && result.ita < 90.0);
    assert!(["fair", "medium", "dark"].contains(&result.skin_tone.as_str()));
}

#[test]
fn test_skin_tone_ordering_across_complexions() {
    let catalog = reference_catalog();

    let (light_image, face) = portrait([235, 205, 185]);
    let light = match_skin_tone(
        &light_image,
        &SkinToneEstimator::new(FixedDetector(vec![face])),
        &catalog,
    )
    .unwrap();

    let (dark_image, face) = portrait([105, 75, 55]);
    let dark = match_skin_tone(
        &dark_image,
        &SkinToneEstimator::new(FixedDetector(vec![face])),
        &catalog,
    )
    .unwrap();

    assert!(light.ita > dark.ita);
}

#[test]
fn test_no_face_detected_end_to_end() {
    let (image, _) = portrait([200, 160, 140]);
    let estimator = SkinToneEstimator::new(FixedDetector(Vec::new()));

    match match_skin_tone(&image, &estimator, &reference_catalog()) {
        Err(AnalysisError::NoFaceDetected) => {}
        other => panic!("expected NoFaceDetected, got {:?}", other),
    }
}

#[test]
fn test_empty_catalog_end_to_end() {
    let (image, face) = portrait([200, 160, 140]);
    let estimator = SkinToneEstimator::new(FixedDetector(vec![face]));

    match match_skin_tone(&image, &estimator, &ToneCatalog::default()) {
        Err(AnalysisError::EmptyCatalog) => {}
        other => panic!("expected EmptyCatalog, got {:?}", other),
    }
}

// ============================================================================
// Tone Matching
// ============================================================================

#[test]
fn test_reference_catalog_scenario() {
    let catalog = reference_catalog();
    let best = match_tone(22.0, &catalog).unwrap();
    assert_eq!(best.skin_tone, "medium");
}

#[test]
fn test_match_is_always_minimal() {
    let catalog = reference_catalog();
    for query in [-90.0, -25.0, 0.0, 17.5, 32.4, 45.0, 90.0] {
        let best = match_tone(query, &catalog).unwrap();
        let best_distance = (best.ita - query).abs();
        for entry in catalog.entries() {
            assert!(best_distance <= (entry.ita - query).abs());
        }
    }
}

#[test]
fn test_catalog_loaded_from_json_file() {
    let path = std::env::temp_dir().join("tryon_colors_test_models.json");
    std::fs::write(
        &path,
        r#"[
            {"skin_tone": "fair", "ita_value": 45.0},
            {"skin_tone": "medium", "ita_value": 20.0},
            {"skin_tone": "dark", "ita_value": -10.0}
        ]"#,
    )
    .unwrap();

    let catalog = ToneCatalog::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(catalog.len(), 3);
    assert_eq!(match_tone(22.0, &catalog).unwrap().skin_tone, "medium");
}

#[test]
fn test_missing_catalog_file() {
    let missing = std::path::Path::new("no/such/dir/models.json");
    match ToneCatalog::from_json_file(missing) {
        Err(AnalysisError::CatalogUnavailable { .. }) => {}
        other => panic!("expected CatalogUnavailable, got {:?}", other.map(|c| c.len())),
    }
}

// ============================================================================
// Garment Color Pipeline
// ============================================================================

#[test]
fn test_red_garment_scenario() {
    let photo = RgbImage::from_pixel(10, 10, Rgb([255, 0, 0]));
    let result = analyze_garment(
        &photo,
        &DominantColorExtractor::new(),
        &NamedPalette::standard(),
    );

    assert!((result.rgb[0] - 255.0).abs() < 1.0);
    assert!(result.rgb[1] < 1.0);
    assert!(result.rgb[2] < 1.0);
    assert_eq!(result.color_name, "red");
}

#[test]
fn test_garment_on_white_backdrop() {
    // Catalog-photo layout: white backdrop, teal garment in the middle
    let mut photo = RgbImage::from_pixel(80, 80, Rgb([252, 252, 252]));
    for y in 25..55 {
        for x in 25..55 {
            photo.put_pixel(x, y, Rgb([0, 128, 128]));
        }
    }

    let result = analyze_garment(
        &photo,
        &DominantColorExtractor::new(),
        &NamedPalette::standard(),
    );
    assert_eq!(result.color_name, "teal");
}

#[test]
fn test_all_white_photo_still_classifies() {
    let photo = RgbImage::from_pixel(20, 20, Rgb([250, 250, 250]));
    let result = analyze_garment(
        &photo,
        &DominantColorExtractor::new(),
        &NamedPalette::standard(),
    );

    // Near-white fallback: a valid centroid comes back and classifies as a
    // light palette entry
    assert!(result.rgb.iter().all(|c| *c > 240.0));
    assert_eq!(result.color_name, "white");
}

#[test]
fn test_garment_record_batch_shape() {
    let photos = [
        ("red_tee.jpg", Rgb([255, 0, 0]), "red"),
        ("navy_hoodie.png", Rgb([0, 0, 120]), "navy"),
        ("olive_jacket.jpg", Rgb([120, 120, 10]), "olive"),
    ];

    let extractor = DominantColorExtractor::new();
    let palette = NamedPalette::standard();

    for (filename, pixel, expected) in photos {
        let image = RgbImage::from_pixel(16, 16, pixel);
        let record = garment_record(filename, &image, &extractor, &palette);

        assert_eq!(record.filename, filename);
        assert_eq!(record.color, expected);
        assert_eq!(record.garment_type, "t-shirt");
        assert_eq!(record.style, "casual");
    }
}

// ============================================================================
// Named Color Classification
// ============================================================================

#[test]
fn test_classification_is_total_over_odd_inputs() {
    let palette = NamedPalette::standard();
    let queries = [
        [0.0, 0.0, 0.0],
        [255.0, 255.0, 255.0],
        [-40.0, 500.0, 128.5],
        [1e9, -1e9, 0.0],
    ];

    for query in queries {
        let label = palette.classify(query);
        assert!(palette.entries().iter().any(|e| e.name == label));
        assert_eq!(palette.classify(query), label);
    }
}
