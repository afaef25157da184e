//! Benchmarks for mixing the six string voices.

use std::collections::VecDeque;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use rtrb::RingBuffer;
use aerostrum::audio::{ChannelMessage, StringPlayer};
use aerostrum::chord::Sound;
use aerostrum::NUM_STRINGS;

use crate::BLOCK_SIZES;

pub fn bench_player(c: &mut Criterion) {
    let mut group = c.benchmark_group("audio/player");
    let sound = Sound::new(vec![0.25; 44_100], 44_100, 0.7);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // All six strings ringing, resampled 44.1k -> 48k. Strings are
        // restarted whenever they run out so every block mixes six voices.
        let (mut tx, rx) = RingBuffer::<ChannelMessage>::new(64);
        let mut player = StringPlayer::new(48_000.0, rx);
        group.bench_with_input(BenchmarkId::new("six_strings", size), &size, |b, _| {
            b.iter(|| {
                if !player.is_playing(0) {
                    for string in 0..NUM_STRINGS {
                        let _ = tx.push(ChannelMessage::Play { string, sound: sound.clone() });
                    }
                }
                player.render_block(black_box(&mut buffer));
            })
        });

        // Silence: the cost of an idle callback
        let mut idle = StringPlayer::new(48_000.0, VecDeque::new());
        group.bench_with_input(BenchmarkId::new("idle", size), &size, |b, _| {
            b.iter(|| {
                idle.render_block(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
