//! Builds the per-step [`registry::EvalContext`] the assembler consults:
//! minute-of-day wrap, the circadian phase shift a clinical profile (e.g.
//! shift-work misalignment) applies, and the cycle day rolled forward
//! across day boundaries for multi-day runs.

use physiology::{Physiology, Subject};
use registry::{CycleContext, EvalContext};

pub fn eval_context_at(
    subject: &Subject,
    physiology: Physiology,
    minute_of_sim: f64,
    circadian_phase_shift_minutes: f64,
    is_asleep: bool,
) -> EvalContext {
    let minute_of_day = minute_of_sim.rem_euclid(1440.0);
    let circadian_minute_of_day = (minute_of_day + circadian_phase_shift_minutes).rem_euclid(1440.0);

    let cycle = match (subject.cycle_day, subject.cycle_length_days) {
        (Some(start_day), Some(length)) if length > 0.0 => {
            let days_elapsed = (minute_of_sim / 1440.0).floor();
            Some(CycleContext {
                cycle_day: (start_day + days_elapsed).rem_euclid(length),
                cycle_length_days: length,
            })
        }
        _ => None,
    };

    EvalContext {
        minute_of_sim,
        minute_of_day,
        circadian_minute_of_day,
        is_asleep,
        sex: subject.sex,
        age_years: subject.age_years,
        cycle,
        physiology,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physiology::Sex;

    fn male() -> Subject {
        Subject::new(Sex::Male, 30.0, 80.0, 178.0)
    }

    fn phys(subject: &Subject) -> Physiology {
        physiology::derive_physiology(subject).unwrap()
    }

    #[test]
    fn minute_of_day_wraps_across_midnight() {
        let subject = male();
        let ctx = eval_context_at(&subject, phys(&subject), 1500.0, 0.0, false);
        assert_eq!(ctx.minute_of_day, 60.0);
    }

    #[test]
    fn circadian_phase_shift_wraps_into_range() {
        let subject = male();
        let ctx = eval_context_at(&subject, phys(&subject), 0.0, 720.0, false);
        assert_eq!(ctx.circadian_minute_of_day, 720.0);
        let ctx2 = eval_context_at(&subject, phys(&subject), 1380.0, 120.0, false);
        assert_eq!(ctx2.circadian_minute_of_day, 60.0);
    }

    #[test]
    fn cycle_day_rolls_forward_across_days() {
        let subject = Subject::new(Sex::Female, 28.0, 60.0, 165.0).with_cycle(26.0, 28.0);
        let ctx = eval_context_at(&subject, phys(&subject), 2.0 * 1440.0, 0.0, false);
        assert_eq!(ctx.cycle.unwrap().cycle_day, 0.0);
    }
}
