use std::collections::BTreeMap;

use crate::error::SimError;

// Initial sweep direction for SCAN. The simulator always runs with Right
// (toward larger track numbers); Left exists so callers can flip the sweep
// without touching the walk logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

// Divide requests into two lists based on their relation to the current
// position, preserving arrival order within each half.
pub fn partition(position: i64, requests: &[i64]) -> (Vec<i64>, Vec<i64>) {
    let mut at_or_below = Vec::new();
    let mut above = Vec::new();
    for &track in requests {
        if track <= position {
            at_or_below.push(track);
        } else {
            above.push(track);
        }
    }
    (at_or_below, above)
}

fn min_max(requests: &[i64]) -> Result<(i64, i64), SimError> {
    match (requests.iter().min(), requests.iter().max()) {
        (Some(&min), Some(&max)) => Ok((min, max)),
        _ => Err(SimError::empty_requests()),
    }
}

fn check_disk_size(disk_size: i64) -> Result<(), SimError> {
    if disk_size <= 0 {
        return Err(SimError::bad_disk_size(disk_size));
    }
    Ok(())
}

// FCFS: service requests in arrival order, summing the distance between
// consecutive tracks.
pub fn fcfs(initial_position: i64, requests: &[i64]) -> Result<i64, SimError> {
    let first = requests.first().ok_or_else(SimError::empty_requests)?;
    let mut total = (initial_position - first).abs();
    for pair in requests.windows(2) {
        total += (pair[1] - pair[0]).abs();
    }
    Ok(total)
}

// Nearest pending track to the head: compare the greatest track strictly
// below the head with the smallest track at or above it. On an exact
// distance tie the lower track wins.
fn closest_pending(pending: &BTreeMap<i64, usize>, position: i64) -> Option<i64> {
    let below = pending.range(..position).next_back().map(|(&track, _)| track);
    let above = pending.range(position..).next().map(|(&track, _)| track);
    match (below, above) {
        (Some(b), Some(a)) => {
            if position - b <= a - position {
                Some(b)
            } else {
                Some(a)
            }
        }
        (Some(b), None) => Some(b),
        (None, above) => above,
    }
}

fn remove_pending(pending: &mut BTreeMap<i64, usize>, track: i64) {
    if let Some(count) = pending.get_mut(&track) {
        *count -= 1;
        if *count == 0 {
            pending.remove(&track);
        }
    }
}

// SSTF: always service the closest pending track next. The pending set is an
// ordered multiset so each nearest-neighbor lookup and removal is O(log n).
pub fn sstf(initial_position: i64, requests: &[i64]) -> Result<i64, SimError> {
    if requests.is_empty() {
        return Err(SimError::empty_requests());
    }

    let mut pending: BTreeMap<i64, usize> = BTreeMap::new();
    for &track in requests {
        *pending.entry(track).or_insert(0) += 1;
    }

    let mut position = initial_position;
    let mut total = 0;
    while let Some(track) = closest_pending(&pending, position) {
        remove_pending(&mut pending, track);
        total += (position - track).abs();
        position = track;
    }
    Ok(total)
}

// SCAN: sweep the head to one edge of the disk servicing requests on the
// way, then reverse and sweep back for the rest. The disk bounds are folded
// into the request list so the walk always reaches the physical edge.
pub fn scan(
    initial_position: i64,
    requests: &[i64],
    disk_size: i64,
    direction: Direction,
) -> Result<i64, SimError> {
    if requests.is_empty() {
        return Err(SimError::empty_requests());
    }
    check_disk_size(disk_size)?;

    let mut augmented = requests.to_vec();
    augmented.push(0);
    augmented.push(disk_size - 1);
    augmented.sort_unstable();

    let (at_or_below, above) = partition(initial_position, &augmented);
    let mut position = initial_position;
    let mut total = 0;

    match direction {
        Direction::Right => {
            for &track in &above {
                total += (position - track).abs();
                position = track;
            }
            if !at_or_below.is_empty() {
                // Reach the low edge of the disk before reversing.
                total += position.abs();
                position = 0;
            }
            for &track in at_or_below.iter().rev() {
                total += (position - track).abs();
                position = track;
            }
        }
        Direction::Left => {
            for &track in at_or_below.iter().rev() {
                total += (position - track).abs();
                position = track;
            }
            if !above.is_empty() {
                // Reach the high edge of the disk before reversing.
                total += (position - (disk_size - 1)).abs();
                position = disk_size - 1;
            }
            for &track in &above {
                total += (position - track).abs();
                position = track;
            }
        }
    }
    Ok(total)
}

// C-SCAN: sweep toward the high end, wrap to track 0, and continue in the
// same direction. Computed in closed form from the request extremes rather
// than by walking.
pub fn c_scan(initial_position: i64, requests: &[i64], disk_size: i64) -> Result<i64, SimError> {
    check_disk_size(disk_size)?;
    let (min, max) = min_max(requests)?;

    let total = if initial_position > max {
        // Past every request: run to the end, wrap the full disk, then reach
        // the lowest request.
        (disk_size - initial_position) + disk_size + min
    } else if initial_position < min {
        max - initial_position
    } else {
        (disk_size - initial_position) + disk_size + (max - min)
    };
    Ok(total)
}

// LOOK: sweep only as far as the farthest pending request, never to the
// disk edge.
pub fn look(initial_position: i64, requests: &[i64]) -> Result<i64, SimError> {
    let (min, max) = min_max(requests)?;

    if initial_position < min || initial_position > max {
        return Ok((initial_position - min).abs() + (max - min));
    }

    let (at_or_below, above) = partition(initial_position, requests);
    let low = at_or_below.iter().min().copied().unwrap_or(initial_position);
    let high = above.iter().max().copied().unwrap_or(initial_position);
    Ok((initial_position - low).max(high - initial_position))
}

// C-LOOK: like C-SCAN but the wrap jumps from the highest pending request
// straight to the lowest one.
pub fn c_look(initial_position: i64, requests: &[i64]) -> Result<i64, SimError> {
    let (min, max) = min_max(requests)?;

    if initial_position > max {
        return Ok(initial_position - min);
    }
    if initial_position < min {
        return Ok(max - initial_position);
    }

    let (at_or_below, above) = partition(initial_position, requests);
    let low = at_or_below
        .iter()
        .min()
        .copied()
        .ok_or_else(|| SimError::InvalidInput("no request at or below the head".to_string()))?;
    let high = above
        .iter()
        .max()
        .copied()
        .ok_or_else(|| SimError::InvalidInput("no request above the head".to_string()))?;
    Ok((max - low) + (high - min))
}
