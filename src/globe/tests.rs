use super::sampler::{RandomSource, ThreadRandom, sample_orbits};
use super::satellite_field::{Rgb, SatelliteField};
use super::{CountryGrowth, DatasetEpoch, GlobeScene, GrowthError, OrbitClass};
use crate::http_handler::http_response::{
    country_colors::CountryColorsResponse,
    satellite_dataset::{CountryOrbitProfile, OrbitWeights, SatelliteDataset},
};
use itertools::Itertools;

/// Replays a fixed value sequence, cycling when exhausted.
struct ScriptedRandom {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedRandom {
    fn new(values: Vec<f64>) -> Self { Self { values, next: 0 } }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

fn profile(code: &str, count: u32, leo: f64, meo: f64, geo: f64) -> CountryOrbitProfile {
    CountryOrbitProfile::test(code, code, count, OrbitWeights::new(leo, meo, geo))
}

#[test]
fn sampler_output_length_matches_count() {
    let weights = OrbitWeights::new(0.5, 0.3, 0.2);
    for count in [0, 1, 17, 500] {
        let classes = sample_orbits(&weights, count, &mut ThreadRandom);
        assert_eq!(classes.len(), count as usize);
    }
}

#[test]
fn sampler_is_deterministic_under_scripted_randomness() {
    let weights = OrbitWeights::new(0.5, 0.3, 0.2);
    let script = vec![0.0, 0.49, 0.5, 0.79, 0.8, 0.999];
    let expected = [
        OrbitClass::Leo,
        OrbitClass::Leo,
        OrbitClass::Meo,
        OrbitClass::Meo,
        OrbitClass::Geo,
        OrbitClass::Geo,
    ];

    let first = sample_orbits(&weights, 6, &mut ScriptedRandom::new(script.clone()));
    let second = sample_orbits(&weights, 6, &mut ScriptedRandom::new(script));
    assert_eq!(first, expected);
    assert_eq!(first, second);
}

#[test]
fn geo_absorbs_weight_slack() {
    // weights sum to 0.6, everything beyond the MEO threshold lands in GEO
    let weights = OrbitWeights::new(0.2, 0.2, 0.2);
    let classes = sample_orbits(&weights, 3, &mut ScriptedRandom::new(vec![0.19, 0.39, 0.41]));
    assert_eq!(classes, [OrbitClass::Leo, OrbitClass::Meo, OrbitClass::Geo]);
    assert!(weights.consistency_slack() > 0.01);
}

#[test]
fn sampled_frequencies_track_weights() {
    let weights = OrbitWeights::new(0.7, 0.2, 0.1);
    let draws = 100_000;
    let counts = sample_orbits(&weights, draws, &mut ThreadRandom).into_iter().counts();

    for class in [OrbitClass::Leo, OrbitClass::Meo, OrbitClass::Geo] {
        let observed =
            counts.get(&class).copied().unwrap_or(0) as f64 / f64::from(draws);
        let declared = weights.share_of(class);
        assert!(
            (observed - declared).abs() < 0.01,
            "{class}: observed {observed:.4}, declared {declared:.4}"
        );
    }
}

#[test]
fn growth_delta_and_percent() {
    let eighties = profile("USA", 10, 0.5, 0.3, 0.2);
    let today = profile("USA", 25, 0.7, 0.2, 0.1);
    let growth = CountryGrowth::between(&eighties, &today).unwrap();
    assert_eq!(growth.delta(), 15);
    assert!((growth.delta_percent() - 150.0).abs() < f64::EPSILON);
}

#[test]
fn growth_percent_rounds_to_one_decimal() {
    let eighties = profile("FRA", 3, 0.5, 0.3, 0.2);
    let today = profile("FRA", 10, 0.5, 0.3, 0.2);
    let growth = CountryGrowth::between(&eighties, &today).unwrap();
    assert_eq!(growth.delta(), 7);
    assert!((growth.delta_percent() - 233.3).abs() < f64::EPSILON);
}

#[test]
fn growth_with_zero_baseline_is_undefined() {
    let eighties = profile("CHN", 0, 0.5, 0.3, 0.2);
    let today = profile("CHN", 40, 0.8, 0.1, 0.1);
    assert_eq!(
        CountryGrowth::between(&eighties, &today).unwrap_err(),
        GrowthError::DivisionUndefined
    );
}

#[test]
fn growth_requires_matching_codes() {
    let eighties = profile("USA", 10, 0.5, 0.3, 0.2);
    let today = profile("RUS", 12, 0.5, 0.3, 0.2);
    assert_eq!(CountryGrowth::between(&eighties, &today).unwrap_err(), GrowthError::CodeMismatch);
}

#[test]
fn overlay_percent_breakdown_rounds() {
    let weights = OrbitWeights::new(0.7, 0.2, 0.1);
    assert_eq!(weights.percent_of(OrbitClass::Leo), 70);
    assert_eq!(weights.percent_of(OrbitClass::Meo), 20);
    assert_eq!(weights.percent_of(OrbitClass::Geo), 10);
    assert_eq!(OrbitWeights::new(0.666, 0.334, 0.0).percent_of(OrbitClass::Leo), 67);
}

#[test]
fn rgb_parses_hex_colors() {
    assert_eq!(Rgb::parse("#ffffff"), Some(Rgb::WHITE));
    assert_eq!(Rgb::parse("#808080"), Some(Rgb::WHITE.scaled(128.0 / 255.0)));
    assert!(Rgb::parse("ffffff").is_none());
    assert!(Rgb::parse("#ffff").is_none());
    assert!(Rgb::parse("#zzzzzz").is_none());
}

fn test_palette() -> CountryColorsResponse {
    CountryColorsResponse::test(&[("USA", "#ff0000"), ("ESU", "#00ff00")])
}

fn test_dataset() -> SatelliteDataset {
    SatelliteDataset::test(
        5,
        vec![profile("USA", 3, 1.0, 0.0, 0.0), profile("ESU", 2, 0.0, 0.0, 1.0)],
    )
}

#[test]
fn field_places_every_unit_on_its_shell() {
    let field =
        SatelliteField::populate(&test_dataset(), &test_palette(), &mut ScriptedRandom::new(vec![0.25, 0.5, 0.75]));
    assert_eq!(field.len(), 5);
    assert_eq!(field.legend().len(), 2);
    assert_eq!(field.colors().len(), 5);

    for instance in field.instances() {
        let [x, y, z] = instance.position();
        let radius = (x * x + y * y + z * z).sqrt();
        assert!((radius - instance.orbit().shell_radius()).abs() < 1e-9);
    }
    // weights are degenerate, so the classes are fully determined
    let census = field.instances().iter().map(|i| i.orbit()).counts();
    assert_eq!(census.get(&OrbitClass::Leo), Some(&3));
    assert_eq!(census.get(&OrbitClass::Geo), Some(&2));
}

#[test]
fn highlight_dims_other_countries_and_restores() {
    let mut field =
        SatelliteField::populate(&test_dataset(), &test_palette(), &mut ThreadRandom);
    let base: Vec<_> = field.colors().to_vec();

    field.highlight(Some("USA"));
    for (i, color) in field.colors().iter().enumerate() {
        if i < 3 {
            assert_eq!(*color, base[i], "highlighted country must keep its color");
        } else {
            assert_eq!(*color, base[i].scaled(0.2), "other countries must be dimmed");
        }
    }

    field.highlight(None);
    assert_eq!(field.colors(), &base[..]);
}

#[test]
fn epoch_switch_discards_superseded_apply() {
    let mut scene = GlobeScene::from_parts(
        test_palette(),
        DatasetEpoch::Today,
        test_dataset(),
        &mut ThreadRandom,
    );
    assert_eq!(scene.epoch(), DatasetEpoch::Today);
    assert_eq!(scene.field().len(), 5);

    // two switches issued back to back, the first is still "in flight"
    let stale = scene.begin_switch();
    let fresh = scene.begin_switch();

    let newer = SatelliteDataset::test(2, vec![profile("USA", 2, 1.0, 0.0, 0.0)]);
    assert!(scene.apply_dataset(&fresh, DatasetEpoch::Today, newer, &mut ThreadRandom));

    let older = SatelliteDataset::test(9, vec![profile("ESU", 9, 0.0, 0.0, 1.0)]);
    assert!(!scene.apply_dataset(&stale, DatasetEpoch::Eighties, older, &mut ThreadRandom));

    // the late arrival of the superseded dataset changed nothing
    assert_eq!(scene.epoch(), DatasetEpoch::Today);
    assert_eq!(scene.field().len(), 2);
    assert_eq!(scene.count_label(), "2 satellites");
}

#[test]
fn offline_scene_is_empty_but_usable() {
    let mut scene = GlobeScene::offline();
    assert!(scene.field().is_empty());
    assert!(scene.dataset().is_none());
    scene.field_mut().highlight(Some("USA"));
    assert_eq!(scene.count_label(), "no satellite data");
}
