//! Measurement Tables
//! Experiment results compiled into the binary, one table per metric.
//!
//! Replace the placeholder values with the numbers from your own runs before
//! generating final charts.

/// Message sizes in bytes.
pub const MSG_SIZES: [u64; 5] = [256, 1024, 4096, 16384, 65536];

/// Thread counts for the latency sweep.
pub const THREAD_COUNTS: [u64; 4] = [1, 2, 4, 8];

/// One value per copy-path variant.
#[derive(Debug, Clone, PartialEq)]
pub struct PerVariant<T> {
    pub two_copy: T,
    pub one_copy: T,
    pub zero_copy: T,
}

/// All hardcoded experiment results.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurements {
    pub msg_sizes: Vec<u64>,
    pub thread_counts: Vec<u64>,
    /// Gbps per message size, 4 threads.
    pub throughput: PerVariant<Vec<f64>>,
    /// Average latency in microseconds per thread count, 4096 B messages.
    pub latency: PerVariant<Vec<f64>>,
    pub l1_misses: PerVariant<Vec<f64>>,
    /// Last level cache misses.
    pub llc_misses: PerVariant<Vec<f64>>,
    pub cycles: PerVariant<Vec<f64>>,
    /// Total bytes transferred, paired with `cycles`.
    pub bytes: PerVariant<Vec<f64>>,
}

impl Measurements {
    /// The placeholder results shipped with the report.
    pub fn sample() -> Self {
        Self {
            msg_sizes: MSG_SIZES.to_vec(),
            thread_counts: THREAD_COUNTS.to_vec(),
            throughput: PerVariant {
                two_copy: vec![0.15, 0.58, 1.85, 4.20, 6.50],
                one_copy: vec![0.18, 0.72, 2.30, 5.10, 7.80],
                zero_copy: vec![0.10, 0.50, 2.10, 5.80, 9.20],
            },
            latency: PerVariant {
                two_copy: vec![12.5, 14.2, 18.7, 28.3],
                one_copy: vec![10.1, 11.8, 15.4, 23.6],
                zero_copy: vec![15.2, 16.8, 19.5, 26.1],
            },
            l1_misses: PerVariant {
                two_copy: vec![45000.0, 120000.0, 380000.0, 1200000.0, 4500000.0],
                one_copy: vec![32000.0, 85000.0, 260000.0, 850000.0, 3200000.0],
                zero_copy: vec![28000.0, 70000.0, 210000.0, 680000.0, 2500000.0],
            },
            llc_misses: PerVariant {
                two_copy: vec![5000.0, 18000.0, 65000.0, 250000.0, 980000.0],
                one_copy: vec![3500.0, 12000.0, 42000.0, 160000.0, 620000.0],
                zero_copy: vec![2000.0, 8000.0, 28000.0, 105000.0, 400000.0],
            },
            cycles: PerVariant {
                two_copy: vec![5e6, 15e6, 45e6, 150e6, 500e6],
                one_copy: vec![4e6, 11e6, 32e6, 105e6, 350e6],
                zero_copy: vec![4.5e6, 12e6, 30e6, 85e6, 280e6],
            },
            bytes: PerVariant {
                two_copy: vec![1.5e6, 5.8e6, 18.5e6, 42e6, 65e6],
                one_copy: vec![1.8e6, 7.2e6, 23e6, 51e6, 78e6],
                zero_copy: vec![1e6, 5e6, 21e6, 58e6, 92e6],
            },
        }
    }
}
