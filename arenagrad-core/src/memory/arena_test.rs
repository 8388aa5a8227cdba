use super::*;

#[test]
fn test_alloc_returns_consecutive_slots() {
    let mut arena = Arena::with_capacity(4);
    assert_eq!(arena.alloc(10), 0);
    assert_eq!(arena.alloc(20), 1);
    assert_eq!(arena.alloc(30), 2);
    assert_eq!(arena.len(), 3);
    assert_eq!(arena.get(1), Some(&20));
    assert_eq!(arena.get(3), None);
}

#[test]
fn test_alloc_grows_geometrically() {
    let mut arena = Arena::with_capacity(Arena::<u8>::DEFAULT_CAPACITY);
    let initial = arena.capacity();
    for i in 0..=initial {
        arena.alloc(i as u8);
    }
    assert!(arena.capacity() >= 2 * initial);
    assert_eq!(arena.len(), initial + 1);
}

#[test]
fn test_reset_keeps_capacity_and_bumps_generation() {
    let mut arena = Arena::new();
    for i in 0..200 {
        arena.alloc(i);
    }
    let capacity = arena.capacity();
    assert_eq!(arena.generation(), 0);

    arena.reset();
    assert!(arena.is_empty());
    assert_eq!(arena.capacity(), capacity);
    assert_eq!(arena.generation(), 1);

    // Slots are reused from the start.
    assert_eq!(arena.alloc(7), 0);
    assert_eq!(arena.get(0), Some(&7));
}

#[test]
fn test_release_frees_storage() {
    let mut arena = Arena::new();
    arena.alloc(1.0f64);
    arena.release();
    assert!(arena.is_released());
    assert_eq!(arena.capacity(), 0);
    assert!(arena.is_empty());
}

#[test]
#[should_panic(expected = "Arena used after release")]
fn test_alloc_after_release_is_fatal() {
    let mut arena = Arena::new();
    arena.release();
    arena.alloc(1u32);
}

#[test]
fn test_iter_in_allocation_order() {
    let mut arena = Arena::new();
    arena.alloc("a");
    arena.alloc("b");
    let items: Vec<_> = arena.iter().copied().collect();
    assert_eq!(items, vec!["a", "b"]);
}
