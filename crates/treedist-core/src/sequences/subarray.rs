/// Length of the longest contiguous subarray present in both slices.
///
/// Dynamic programming over suffix match lengths, keeping one row.
pub fn find_length(left: &[i64], right: &[i64]) -> usize {
    let mut row = vec![0usize; right.len() + 1];
    let mut best = 0;

    for &a in left {
        // Walk right-to-left so row[j] still holds the previous row's value
        for j in (0..right.len()).rev() {
            row[j + 1] = if a == right[j] { row[j] + 1 } else { 0 };
            best = best.max(row[j + 1]);
        }
    }

    best
}
