/// Points for a perfect, instant click.
pub const MAX_ROUND_POINTS: u32 = 100;

/// Points lost per second spent on a round.
pub const TIME_PENALTY_PER_SECOND: f64 = 10.0;

/// Score of a single round
///
/// `max(0, 100 - floor(distance) - floor(10 * elapsed_seconds))`. Distance is
/// measured in plane units; negative elapsed time counts as zero.
pub fn score_for_round(distance: f64, elapsed_seconds: f64) -> u32 {
    let distance_penalty = distance.max(0.0).floor();
    let time_penalty = (elapsed_seconds.max(0.0) * TIME_PENALTY_PER_SECOND).floor();
    let points = f64::from(MAX_ROUND_POINTS) - distance_penalty - time_penalty;

    if points > 0.0 {
        points as u32
    } else {
        0
    }
}
