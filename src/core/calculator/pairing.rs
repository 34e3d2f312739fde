use log::warn;

use crate::models::punch::{Punch, PunchKind};
use crate::telemetry::Telemetry;
use crate::utils::formatting::format_elapsed;

/// One punch-in matched with the next chronological punch-out, or left open
/// if the employee is still clocked in.
#[derive(Debug, Clone)]
pub struct PunchPair {
    pub punch_in: Punch,
    pub punch_out: Option<Punch>,
    /// Human-readable duration of the pair, absent while the pair is open.
    pub elapsed_time: Option<String>,
}

impl PunchPair {
    pub fn is_open(&self) -> bool {
        self.punch_out.is_none()
    }
}

/// Order punches ascending by timestamp. The sort is stable, so punches with
/// equal timestamps keep their source order.
pub fn sort_punches(mut punches: Vec<Punch>) -> Vec<Punch> {
    punches.sort_by_key(|p| p.timestamp);
    punches
}

/// Pair chronologically ordered punches into in/out pairs.
///
/// Single left-to-right scan holding at most one open punch-in:
/// - a punch-in while another is open closes the previous one as an open pair
///   (double clock-in with no clock-out between);
/// - a punch-out closes the open punch-in into a completed pair with its
///   elapsed time;
/// - a punch-out with nothing open is dropped, counted and logged;
/// - a punch-in left open at the end becomes a final open pair.
///
/// Pairs are returned most-recent-first. Callers must sort the input
/// (`sort_punches`) beforehand.
pub fn create_punch_pairs_with_total_time(punches: &[Punch]) -> Vec<PunchPair> {
    let mut pairs: Vec<PunchPair> = Vec::new();
    let mut open_in: Option<Punch> = None;

    for punch in punches {
        match punch.kind {
            PunchKind::In => {
                if let Some(prev) = open_in.take() {
                    pairs.push(PunchPair {
                        punch_in: prev,
                        punch_out: None,
                        elapsed_time: None,
                    });
                }
                open_in = Some(punch.clone());
            }
            PunchKind::Out => match open_in.take() {
                Some(in_punch) => {
                    let elapsed = punch.timestamp - in_punch.timestamp;
                    pairs.push(PunchPair {
                        punch_in: in_punch,
                        punch_out: Some(punch.clone()),
                        elapsed_time: Some(format_elapsed(elapsed)),
                    });
                }
                None => {
                    Telemetry::global().record_orphan_punch_out();
                    warn!("dropping orphan punch-out {} (no open punch-in)", punch.id);
                }
            },
        }
    }

    // Still clocked in
    if let Some(in_punch) = open_in {
        pairs.push(PunchPair {
            punch_in: in_punch,
            punch_out: None,
            elapsed_time: None,
        });
    }

    pairs.reverse();
    pairs
}
