use serde::Serialize;

/// Mean, sample standard deviation, and standard error of the mean.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub n: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub std_err: f64,
}

/// Summarize a sample. Empty input gives NaN statistics (serialized as null).
pub fn summarize(xs: &[f64]) -> Summary {
    let n = xs.len();
    if n == 0 {
        return Summary {
            n,
            mean: f64::NAN,
            std_dev: f64::NAN,
            std_err: f64::NAN,
        };
    }
    let mean = xs.iter().sum::<f64>() / n as f64;
    let std_dev = if n < 2 {
        0.0
    } else {
        let ss: f64 = xs.iter().map(|x| (x - mean).powi(2)).sum();
        (ss / (n - 1) as f64).sqrt()
    };
    Summary {
        n,
        mean,
        std_dev,
        std_err: std_dev / (n as f64).sqrt(),
    }
}
