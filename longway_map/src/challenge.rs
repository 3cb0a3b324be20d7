// Challenge building and bounded distinct sampling.
//
// `pick_distinct` is the one rejection sampler in the crate: it draws
// indices in `[0, size)` until it has `count` values not seen before, or
// until its attempt ceiling runs out. The row connector uses it for extra
// edges, the challenge builder for song picks. Every draw advances the
// shared `RunRng`, rejected ones included, so the ceiling is part of the
// reproducible draw sequence.
//
// Boss challenges are fixed per catalog and consume no randomness.

use crate::config::MapConfig;
use crate::types::Challenge;
use longway_catalog::{Catalog, Song};
use longway_prng::RunRng;

/// Draw up to `count` distinct indices in `[0, size)` that are not in
/// `taken`, in draw order.
///
/// Stops after `attempt_limit` draws and returns whatever it has. Never
/// draws when `size == 0` or nothing is requested.
pub fn pick_distinct(
    size: usize,
    count: usize,
    taken: &[usize],
    attempt_limit: usize,
    rng: &mut RunRng,
) -> Vec<usize> {
    let mut picks = Vec::with_capacity(count);
    if size == 0 {
        return picks;
    }
    let mut attempts = 0;
    while picks.len() < count && attempts < attempt_limit {
        attempts += 1;
        let v = rng.next_int(size);
        if taken.contains(&v) || picks.contains(&v) {
            continue;
        }
        picks.push(v);
    }
    picks
}

/// Sample `count` distinct songs from `pool`.
///
/// A pool no larger than `count` is returned whole, in pool order, without
/// drawing.
pub fn sample(pool: &[&Song], count: usize, attempts_per_song: usize, rng: &mut RunRng) -> Vec<Song> {
    if pool.len() <= count {
        return pool.iter().map(|s| (*s).clone()).collect();
    }
    let limit = attempts_per_song.saturating_mul(pool.len());
    pick_distinct(pool.len(), count, &[], limit, rng)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect()
}

/// Build a regular node challenge from the act's filtered pool.
pub fn build_challenge(
    pool: &[&Song],
    pool_size: usize,
    config: &MapConfig,
    rng: &mut RunRng,
) -> Challenge {
    let songs = sample(pool, pool_size, config.sample_attempts_per_song, rng);
    let picks = config.picks_per_challenge.min(songs.len());
    Challenge {
        name: "Challenge".to_string(),
        summary: format!("Pick any {picks} of these {} tracks.", songs.len()),
        songs,
    }
}

/// The boss challenge: the configured boss song, or the catalog's first
/// song when the title is missing.
pub fn boss_challenge(catalog: &Catalog, config: &MapConfig) -> Challenge {
    let song = catalog
        .find_by_title(&config.boss_title)
        .unwrap_or_else(|| catalog.first())
        .clone();
    Challenge {
        name: "Boss".to_string(),
        summary: format!("Final showdown: {}.", song.title),
        songs: vec![song],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn songs(n: usize) -> Vec<Song> {
        (0..n)
            .map(|i| Song::new(format!("id{i}"), format!("Track {i}"), 2))
            .collect()
    }

    #[test]
    fn pick_distinct_returns_unique_in_range() {
        let mut rng = RunRng::new(7);
        for _ in 0..200 {
            let picks = pick_distinct(10, 4, &[], 1000, &mut rng);
            assert_eq!(picks.len(), 4);
            let mut sorted = picks.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 4, "duplicates in {picks:?}");
            assert!(picks.iter().all(|p| *p < 10));
        }
    }

    #[test]
    fn pick_distinct_skips_taken() {
        let mut rng = RunRng::new(11);
        for _ in 0..200 {
            let picks = pick_distinct(3, 1, &[0, 2], 1000, &mut rng);
            assert_eq!(picks, vec![1]);
        }
    }

    #[test]
    fn pick_distinct_gives_up_at_limit() {
        let mut rng = RunRng::new(5);
        // Only 2 values exist; asking for 5 must stop at the ceiling.
        let picks = pick_distinct(2, 5, &[], 30, &mut rng);
        assert!(picks.len() <= 2);

        let mut rng = RunRng::new(5);
        assert!(pick_distinct(10, 3, &[], 0, &mut rng).is_empty());
        // Zero attempts means zero draws.
        assert_eq!(rng, RunRng::new(5));
    }

    #[test]
    fn pick_distinct_empty_range_never_draws() {
        let mut rng = RunRng::new(5);
        assert!(pick_distinct(0, 3, &[], 100, &mut rng).is_empty());
        assert_eq!(rng, RunRng::new(5));
    }

    #[test]
    fn small_pool_is_returned_whole() {
        let catalog = songs(2);
        let pool: Vec<&Song> = catalog.iter().collect();
        let mut rng = RunRng::new(1);
        let picked = sample(&pool, 2, 8, &mut rng);
        assert_eq!(picked, catalog);
        let picked = sample(&pool, 9, 8, &mut rng);
        assert_eq!(picked, catalog);
        assert_eq!(rng, RunRng::new(1), "returning the whole pool draws nothing");
    }

    #[test]
    fn sample_is_distinct_and_deterministic() {
        let catalog = songs(20);
        let pool: Vec<&Song> = catalog.iter().collect();
        let a = sample(&pool, 12, 8, &mut RunRng::new(99));
        let b = sample(&pool, 12, 8, &mut RunRng::new(99));
        assert_eq!(a, b);
        let mut ids: Vec<&str> = a.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), a.len());
    }

    #[test]
    fn challenge_summary_tracks_song_count() {
        let config = MapConfig::default();
        let catalog = songs(20);
        let pool: Vec<&Song> = catalog.iter().collect();
        let c = build_challenge(&pool, 9, &config, &mut RunRng::new(3));
        assert_eq!(c.name, "Challenge");
        assert_eq!(c.songs.len(), 9);
        assert_eq!(c.summary, "Pick any 3 of these 9 tracks.");

        let small: Vec<&Song> = pool[..2].to_vec();
        let c = build_challenge(&small, 9, &config, &mut RunRng::new(3));
        assert_eq!(c.summary, "Pick any 2 of these 2 tracks.");
    }

    #[test]
    fn boss_uses_named_song() {
        let mut list = songs(3);
        list.push(Song::new("q", "Bohemian Rhapsody", 4));
        let catalog = Catalog::new(list).unwrap();
        let boss = boss_challenge(&catalog, &MapConfig::default());
        assert_eq!(boss.name, "Boss");
        assert_eq!(boss.songs.len(), 1);
        assert_eq!(boss.songs[0].id, "q");
        assert_eq!(boss.summary, "Final showdown: Bohemian Rhapsody.");
    }

    #[test]
    fn boss_falls_back_to_first_song() {
        let catalog = Catalog::new(songs(3)).unwrap();
        let boss = boss_challenge(&catalog, &MapConfig::default());
        assert_eq!(boss.songs.len(), 1);
        assert_eq!(boss.songs[0].id, "id0");
        assert_eq!(boss.summary, "Final showdown: Track 0.");
    }
}
