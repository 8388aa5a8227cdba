use super::*;
use std::collections::HashSet;

#[test]
fn test_random_sampler_len() {
    assert_eq!(RandomSampler::new(false, None).len(10), 10);
    assert_eq!(RandomSampler::new(false, Some(5)).len(10), 5);
    assert_eq!(RandomSampler::new(true, Some(50)).len(10), 50);
    assert_eq!(RandomSampler::new(false, Some(50)).len(10), 0);
    assert_eq!(RandomSampler::new(true, Some(5)).len(0), 0);
}

#[test]
fn test_random_sampler_without_replacement_is_a_permutation() {
    let sampler = RandomSampler::new(false, None);
    let indices: Vec<usize> = sampler.iter(10).collect();
    assert_eq!(indices.len(), 10);
    let unique: HashSet<usize> = indices.into_iter().collect();
    assert_eq!(unique, (0..10).collect());
}

#[test]
fn test_random_sampler_subset_without_replacement() {
    let sampler = RandomSampler::new(false, Some(5));
    let indices: Vec<usize> = sampler.iter(10).collect();
    assert_eq!(indices.len(), 5);
    let unique: HashSet<usize> = indices.iter().copied().collect();
    assert_eq!(unique.len(), 5);
    assert!(indices.iter().all(|&i| i < 10));
}

#[test]
fn test_random_sampler_too_many_without_replacement_is_empty() {
    let sampler = RandomSampler::new(false, Some(10));
    assert_eq!(sampler.iter(5).count(), 0);
}

#[test]
fn test_random_sampler_with_replacement() {
    let sampler = RandomSampler::new(true, Some(100));
    let indices: Vec<usize> = sampler.iter(3).collect();
    assert_eq!(indices.len(), 100);
    assert!(indices.iter().all(|&i| i < 3));
}

#[test]
fn test_random_sampler_empty_dataset() {
    for replacement in [false, true] {
        for num_samples in [None, Some(5)] {
            let sampler = RandomSampler::new(replacement, num_samples);
            assert_eq!(sampler.iter(0).count(), 0);
        }
    }
}

#[test]
fn test_seeded_sampler_is_reproducible() {
    let sampler = RandomSampler::new(true, Some(20)).with_seed(99);
    let a: Vec<usize> = sampler.iter(1000).collect();
    let b: Vec<usize> = sampler.iter(1000).collect();
    assert_eq!(a, b);

    let shuffled = RandomSampler::new(false, None).with_seed(5);
    assert_eq!(
        shuffled.iter(50).collect::<Vec<_>>(),
        shuffled.iter(50).collect::<Vec<_>>()
    );
}
