use log::debug;

/// All `alphabet.len() ^ length` sequences over `alphabet`, symbols reused freely.
///
/// Runs an odometer of `length` digits in base `alphabet.len()`, least
/// significant digit first, emitting the current reading before every
/// increment and stopping when the carry runs off the last digit.
pub fn repetitions<T: Clone>(alphabet: &[T], length: usize) -> Vec<Vec<T>> {
    debug!(
        "Generating repetitions of length {} over {} symbols",
        length,
        alphabet.len()
    );

    if length == 0 {
        return vec![Vec::new()];
    }
    if alphabet.is_empty() {
        return Vec::new();
    }

    let base = alphabet.len();
    let mut indexes = vec![0_usize; length];
    let mut result = Vec::new();

    loop {
        result.push(
            indexes
                .iter()
                .filter_map(|&idx| alphabet.get(idx).cloned())
                .collect(),
        );

        let mut position = 0;
        loop {
            let Some(digit) = indexes.get_mut(position) else {
                debug!("Generated {} repetitions", result.len());
                return result;
            };
            *digit += 1;
            if *digit < base {
                break;
            }
            *digit = 0;
            position += 1;
        }
    }
}
