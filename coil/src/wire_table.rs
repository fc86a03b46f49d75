//! A small embedded table of standard round wire gauges, used by
//! [`crate::coil::Coil::guess_round_wire_from_dc_resistance`].

use crate::wire::WireSpec;

/// One entry of the embedded AWG gauge table.
struct Gauge {
    awg: u32,
    conducting_diameter_mm: f64,
    outer_diameter_mm: f64,
    ohms_per_meter: f64,
}

/// Standard round copper wire gauges from AWG 40 (finest) to AWG 10 (coarsest), with their
/// bare conducting diameter, single-build insulated outer diameter, and DC resistance per
/// metre at 20 degrees Celsius.
///
/// Ordered from finest to coarsest so that [`guess_round_wire`] can return the first gauge
/// meeting a resistance target.
const GAUGES: &[Gauge] = &[
    Gauge { awg: 40, conducting_diameter_mm: 0.0799, outer_diameter_mm: 0.0892, ohms_per_meter: 3.441 },
    Gauge { awg: 38, conducting_diameter_mm: 0.1007, outer_diameter_mm: 0.1120, ohms_per_meter: 2.163 },
    Gauge { awg: 36, conducting_diameter_mm: 0.1270, outer_diameter_mm: 0.1405, ohms_per_meter: 1.361 },
    Gauge { awg: 34, conducting_diameter_mm: 0.1600, outer_diameter_mm: 0.1760, ohms_per_meter: 0.8560 },
    Gauge { awg: 32, conducting_diameter_mm: 0.2019, outer_diameter_mm: 0.2210, ohms_per_meter: 0.5383 },
    Gauge { awg: 30, conducting_diameter_mm: 0.2546, outer_diameter_mm: 0.2781, ohms_per_meter: 0.3386 },
    Gauge { awg: 28, conducting_diameter_mm: 0.3211, outer_diameter_mm: 0.3500, ohms_per_meter: 0.2129 },
    Gauge { awg: 26, conducting_diameter_mm: 0.4049, outer_diameter_mm: 0.4400, ohms_per_meter: 0.1339 },
    Gauge { awg: 24, conducting_diameter_mm: 0.5106, outer_diameter_mm: 0.5540, ohms_per_meter: 0.0842 },
    Gauge { awg: 22, conducting_diameter_mm: 0.6438, outer_diameter_mm: 0.6960, ohms_per_meter: 0.0530 },
    Gauge { awg: 20, conducting_diameter_mm: 0.8118, outer_diameter_mm: 0.8730, ohms_per_meter: 0.0333 },
    Gauge { awg: 18, conducting_diameter_mm: 1.0237, outer_diameter_mm: 1.0960, ohms_per_meter: 0.0210 },
    Gauge { awg: 16, conducting_diameter_mm: 1.2908, outer_diameter_mm: 1.3730, ohms_per_meter: 0.0132 },
    Gauge { awg: 14, conducting_diameter_mm: 1.6277, outer_diameter_mm: 1.7210, ohms_per_meter: 0.00829 },
    Gauge { awg: 12, conducting_diameter_mm: 2.0525, outer_diameter_mm: 2.1590, ohms_per_meter: 0.00521 },
    Gauge { awg: 10, conducting_diameter_mm: 2.5882, outer_diameter_mm: 2.7180, ohms_per_meter: 0.00328 },
];

/// Returns the finest (smallest-diameter) standard round wire whose DC resistance over
/// `mean_turn_length` metres does not exceed `target_resistance_ohms`.
///
/// Returns `None` if even the coarsest gauge in the table (AWG 10) exceeds the target.
pub fn guess_round_wire(target_resistance_ohms: f64, mean_turn_length: f64) -> Option<WireSpec> {
    GAUGES
        .iter()
        .find(|g| g.ohms_per_meter * mean_turn_length <= target_resistance_ohms)
        .map(|g| {
            WireSpec::round(
                g.conducting_diameter_mm / 1000.,
                g.outer_diameter_mm / 1000.,
                "copper",
            )
        })
}

/// Runs [`guess_round_wire`] for each target resistance in `targets`, returning one wire
/// per winding in the same order. See §6 `guessRoundWireFromDcResistance`.
pub fn guess_round_wires(targets: &[f64], mean_turn_length: f64) -> Vec<Option<WireSpec>> {
    targets
        .iter()
        .map(|&r| guess_round_wire(r, mean_turn_length))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_finest_gauge_meeting_target() {
        let wire = guess_round_wire(1.0, 1.0).unwrap();
        assert!(wire.nominal_outer_diameter.unwrap() > 0.);
    }

    #[test]
    fn returns_none_when_even_coarsest_gauge_exceeds_target() {
        assert!(guess_round_wire(0.0001, 100.).is_none());
    }

    #[test]
    fn guesses_one_wire_per_target() {
        let wires = guess_round_wires(&[1.0, 0.1], 1.0);
        assert_eq!(wires.len(), 2);
        assert!(wires.iter().all(Option::is_some));
    }
}
