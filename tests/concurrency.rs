extern crate algebra;

#[cfg(test)]
mod tests {
    use algebra::matrices::Matrix;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;

    const THREADS: isize = 8;

    #[test]
    fn check_disjoint_writers_lose_nothing() {
        let rows = THREADS * 4;
        let columns = 50;
        let matrix = Matrix::new(rows, columns).unwrap();
        thread::scope(|scope| {
            for t in 0..THREADS {
                let matrix = &matrix;
                scope.spawn(move || {
                    // each thread owns every THREADS-th row and writes each of its cells
                    // several times, the last write being the value we expect to survive
                    for round in 0..10_i32 {
                        for i in (t..rows).step_by(THREADS as usize) {
                            for j in 0..columns {
                                let value = (i * columns + j) as f64 + f64::from(round);
                                matrix.set(i, j, value).unwrap();
                            }
                        }
                    }
                });
            }
        });
        for i in 0..rows {
            for j in 0..columns {
                assert_eq!(matrix.get(i, j), Ok((i * columns + j) as f64 + 9.0));
            }
        }
    }

    #[test]
    fn check_shared_ownership_across_threads() {
        let matrix = Arc::new(Matrix::new(THREADS, 3).unwrap());
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let matrix = Arc::clone(&matrix);
                thread::spawn(move || {
                    for j in 0..3 {
                        matrix.set(i, j, (i + j) as f64).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        for i in 0..THREADS {
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), Ok((i + j) as f64));
            }
        }
    }

    #[test]
    fn check_readers_see_old_or_new_values() {
        let matrix = Matrix::new(10, 10).unwrap();
        let writing = AtomicBool::new(true);
        thread::scope(|scope| {
            scope.spawn(|| {
                for _ in 0..20 {
                    matrix.each(|_, _, value| if value == 0.0 { 1.0 } else { 0.0 });
                }
                writing.store(false, Ordering::SeqCst);
            });
            for _ in 0..4 {
                scope.spawn(|| {
                    while writing.load(Ordering::SeqCst) {
                        for i in 0..10 {
                            for j in 0..10 {
                                let value = matrix.get(i, j).unwrap();
                                assert!(value == 0.0 || value == 1.0);
                            }
                        }
                        let transposed = matrix.transpose();
                        assert_eq!(transposed.dimensions(), (10, 10));
                        assert!(matrix.dot(&transposed).unwrap() <= 100.0);
                    }
                });
            }
        });
        // an even number of passes flips every cell back
        assert_eq!(matrix.row_major_values(), vec![0.0; 100]);
    }

    #[test]
    fn check_concurrent_arithmetic_on_one_matrix_completes() {
        let matrix = Matrix::new(16, 16).unwrap();
        let other = Matrix::new(16, 16).unwrap();
        other.add_scalar(1.0);
        thread::scope(|scope| {
            scope.spawn(|| {
                for _ in 0..50 {
                    matrix.add(&other).unwrap();
                }
            });
            scope.spawn(|| {
                for _ in 0..50 {
                    matrix.add(&matrix).unwrap();
                    matrix.scale(0.5);
                }
            });
            scope.spawn(|| {
                for _ in 0..50 {
                    let _ = matrix.to_string();
                    let _ = matrix.clone();
                }
            });
        });
        assert_eq!(matrix.dimensions(), (16, 16));
        assert!(matrix.row_major_values().iter().all(|x| x.is_finite()));
    }
}
