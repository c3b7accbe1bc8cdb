// ============================================================
// DELIMITER DETECTION
// ============================================================
// Guess the column delimiter from a leading sample of the content

/// Candidate delimiters, comma first so it wins ties
const CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Number of lines sampled per candidate
const SAMPLE_LINES: usize = 10;

/// Detect the column delimiter of CSV content.
///
/// Each candidate is scored over the first few lines by mean
/// occurrences per line divided by (1 + standard deviation): a
/// delimiter that appears often and with a consistent count per line
/// scores highest. Comma is returned when nothing scores better.
pub fn detect_delimiter(sample: &str) -> u8 {
    let lines: Vec<&str> = sample.lines().take(SAMPLE_LINES).collect();
    if lines.is_empty() {
        return b',';
    }

    let mut best_delimiter = b',';
    let mut best_score = 0.0f32;

    for &delimiter in &CANDIDATES {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| line.bytes().filter(|&b| b == delimiter).count())
            .collect();

        let avg = counts.iter().sum::<usize>() as f32 / counts.len() as f32;
        let variance = counts
            .iter()
            .map(|&c| (c as f32 - avg).powi(2))
            .sum::<f32>()
            / counts.len() as f32;

        let score = avg / (1.0 + variance.sqrt());
        if score > best_score {
            best_score = score;
            best_delimiter = delimiter;
        }
    }

    best_delimiter
}
