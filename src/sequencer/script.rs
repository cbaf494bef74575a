//! The literal animation scripts.
//!
//! Two static tables of (offset, effects) steps: the full anime-style
//! choreography and the reduced-motion short-circuit. Script data is
//! immutable; insertion order is execution order.

use super::{Cue, Effect, Overlay, Phase};

/// One scheduled step: every effect fires when `offset_ms` has elapsed
/// since run start.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    /// Offset in milliseconds from run start
    pub offset_ms: u64,
    /// Effects applied by this step, in order
    pub effects: &'static [Effect],
}

/// Delay before the reduced-motion script settles into `Satisfied`.
pub const REDUCED_DELAY_MS: u64 = 500;

/// The full choreography: anticipation, bite (with sound), three chew
/// cycles (each with sound), then the satisfied finish.
pub const FULL_SCRIPT: &[Step] = &[
    // Start animation
    Step {
        offset_ms: 100,
        effects: &[Effect::Phase(Phase::Anticipation)],
    },
    // Anticipation - a quick blink
    Step {
        offset_ms: 600,
        effects: &[Effect::Overlay(Overlay::Blink, true)],
    },
    Step {
        offset_ms: 750,
        effects: &[Effect::Overlay(Overlay::Blink, false)],
    },
    // Bite - speed lines, mouth opens, bite sound
    Step {
        offset_ms: 1200,
        effects: &[
            Effect::Phase(Phase::Bite),
            Effect::Overlay(Overlay::SpeedLines, true),
            Effect::Overlay(Overlay::MouthOpen, true),
            Effect::Sound(Cue::Bite),
        ],
    },
    // Impact moment
    Step {
        offset_ms: 1350,
        effects: &[Effect::Overlay(Overlay::BiteImpact, true)],
    },
    Step {
        offset_ms: 1400,
        effects: &[Effect::Overlay(Overlay::Sparkles, true)],
    },
    Step {
        offset_ms: 1600,
        effects: &[Effect::Overlay(Overlay::Crumbs, true)],
    },
    Step {
        offset_ms: 1700,
        effects: &[Effect::Overlay(Overlay::BiteImpact, false)],
    },
    Step {
        offset_ms: 1800,
        effects: &[Effect::Overlay(Overlay::SpeedLines, false)],
    },
    // Chew - three open/close cycles with chew sounds and motion lines
    Step {
        offset_ms: 2000,
        effects: &[
            Effect::Phase(Phase::Chew),
            Effect::Overlay(Overlay::MouthOpen, false),
        ],
    },
    Step {
        offset_ms: 2300,
        effects: &[
            Effect::Overlay(Overlay::MouthOpen, true),
            Effect::Overlay(Overlay::ChewLines, true),
            Effect::Sound(Cue::Chew),
        ],
    },
    Step {
        offset_ms: 2500,
        effects: &[Effect::Overlay(Overlay::ChewLines, false)],
    },
    Step {
        offset_ms: 2600,
        effects: &[Effect::Overlay(Overlay::MouthOpen, false)],
    },
    Step {
        offset_ms: 2900,
        effects: &[
            Effect::Overlay(Overlay::MouthOpen, true),
            Effect::Overlay(Overlay::ChewLines, true),
            Effect::Sound(Cue::Chew),
        ],
    },
    Step {
        offset_ms: 3100,
        effects: &[Effect::Overlay(Overlay::ChewLines, false)],
    },
    Step {
        offset_ms: 3200,
        effects: &[Effect::Overlay(Overlay::MouthOpen, false)],
    },
    Step {
        offset_ms: 3500,
        effects: &[
            Effect::Overlay(Overlay::MouthOpen, true),
            Effect::Overlay(Overlay::ChewLines, true),
            Effect::Sound(Cue::Chew),
        ],
    },
    Step {
        offset_ms: 3700,
        effects: &[Effect::Overlay(Overlay::ChewLines, false)],
    },
    Step {
        offset_ms: 3800,
        effects: &[Effect::Overlay(Overlay::MouthOpen, false)],
    },
    // Satisfied - sparkle eyes, content expression
    Step {
        offset_ms: 4200,
        effects: &[
            Effect::Phase(Phase::Satisfied),
            Effect::Overlay(Overlay::Sparkles, true),
            Effect::Overlay(Overlay::Blink, true),
        ],
    },
    Step {
        offset_ms: 4400,
        effects: &[Effect::Overlay(Overlay::Blink, false)],
    },
    Step {
        offset_ms: 4800,
        effects: &[Effect::Overlay(Overlay::Sparkles, false)],
    },
    Step {
        offset_ms: 5200,
        effects: &[Effect::Overlay(Overlay::Crumbs, false)],
    },
];

/// Reduced-motion script: a single jump to `Satisfied`, no sound, no
/// decorative overlays.
pub const REDUCED_SCRIPT: &[Step] = &[Step {
    offset_ms: REDUCED_DELAY_MS,
    effects: &[Effect::Phase(Phase::Satisfied)],
}];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_script_offsets_are_non_decreasing() {
        for pair in FULL_SCRIPT.windows(2) {
            assert!(
                pair[0].offset_ms <= pair[1].offset_ms,
                "script out of order at {}ms",
                pair[1].offset_ms
            );
        }
    }

    #[test]
    fn full_script_starts_at_100_and_ends_at_5200() {
        assert_eq!(FULL_SCRIPT.first().map(|s| s.offset_ms), Some(100));
        assert_eq!(FULL_SCRIPT.last().map(|s| s.offset_ms), Some(5200));
    }

    #[test]
    fn full_script_phase_steps_are_forward_only() {
        let phases: Vec<Phase> = FULL_SCRIPT
            .iter()
            .flat_map(|s| s.effects)
            .filter_map(|e| match e {
                Effect::Phase(p) => Some(*p),
                _ => None,
            })
            .collect();

        assert_eq!(
            phases,
            vec![Phase::Anticipation, Phase::Bite, Phase::Chew, Phase::Satisfied]
        );
        for pair in phases.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn full_script_has_one_bite_and_three_chew_cues() {
        let cues: Vec<Cue> = FULL_SCRIPT
            .iter()
            .flat_map(|s| s.effects)
            .filter_map(|e| match e {
                Effect::Sound(c) => Some(*c),
                _ => None,
            })
            .collect();

        assert_eq!(cues, vec![Cue::Bite, Cue::Chew, Cue::Chew, Cue::Chew]);
    }

    #[test]
    fn bite_cue_fires_with_the_bite_phase_step() {
        let bite_step = FULL_SCRIPT
            .iter()
            .find(|s| s.effects.contains(&Effect::Phase(Phase::Bite)))
            .expect("bite step present");
        assert_eq!(bite_step.offset_ms, 1200);
        assert!(bite_step.effects.contains(&Effect::Sound(Cue::Bite)));
        assert!(bite_step
            .effects
            .contains(&Effect::Overlay(Overlay::MouthOpen, true)));
        assert!(bite_step
            .effects
            .contains(&Effect::Overlay(Overlay::SpeedLines, true)));
    }

    #[test]
    fn chew_cues_fire_at_2300_2900_3500() {
        let offsets: Vec<u64> = FULL_SCRIPT
            .iter()
            .filter(|s| s.effects.contains(&Effect::Sound(Cue::Chew)))
            .map(|s| s.offset_ms)
            .collect();
        assert_eq!(offsets, vec![2300, 2900, 3500]);
    }

    #[test]
    fn every_overlay_ends_the_run_off() {
        let mut flags = crate::sequencer::VisualFlags::default();
        for step in FULL_SCRIPT {
            for effect in step.effects {
                if let Effect::Overlay(overlay, on) = effect {
                    flags.set(*overlay, *on);
                }
            }
        }
        assert_eq!(flags, crate::sequencer::VisualFlags::default());
    }

    #[test]
    fn reduced_script_is_a_single_silent_satisfied_step() {
        assert_eq!(REDUCED_SCRIPT.len(), 1);
        let step = &REDUCED_SCRIPT[0];
        assert_eq!(step.offset_ms, REDUCED_DELAY_MS);
        assert_eq!(step.effects, &[Effect::Phase(Phase::Satisfied)]);
    }
}
