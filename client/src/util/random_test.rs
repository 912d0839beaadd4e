use super::*;

#[test]
fn unit_interval_maps_onto_full_range() {
    assert_eq!(id_from_unit(0.0), 1);
    assert_eq!(id_from_unit(0.5), 414);
    assert_eq!(id_from_unit(0.999_999), CHARACTER_COUNT);
}

#[test]
fn out_of_range_samples_are_clamped() {
    assert_eq!(id_from_unit(1.0), CHARACTER_COUNT);
    assert_eq!(id_from_unit(-3.0), 1);
    assert_eq!(id_from_unit(f64::NAN), 1);
}

#[test]
fn native_pick_is_in_range() {
    let id = random_character_id();
    assert!((1..=CHARACTER_COUNT).contains(&id));
}
