// crates/shared-kernel/tests/volume_number_coerce.rs
use manga_volumes_shared_kernel::VolumeNumber;

#[test]
fn coerces_plain_and_padded_numbers() {
    assert_eq!(VolumeNumber::coerce("7"), VolumeNumber::new(7));
    assert_eq!(VolumeNumber::coerce("  12\t"), VolumeNumber::new(12));
    assert_eq!(VolumeNumber::coerce("007"), VolumeNumber::new(7));
}

#[test]
fn drops_values_that_are_not_volumes() {
    for raw in ["", "0", "-3", "abc", "4.5", "5abc", "4294967296"] {
        assert_eq!(VolumeNumber::coerce(raw), None, "{raw:?} should not coerce");
    }
}

#[test]
fn ordering_follows_the_number() {
    let mut numbers: Vec<_> = ["10", "2", "1"].into_iter().filter_map(VolumeNumber::coerce).collect();
    numbers.sort();
    let plain: Vec<u32> = numbers.into_iter().map(u32::from).collect();
    assert_eq!(plain, vec![1, 2, 10]);
}
