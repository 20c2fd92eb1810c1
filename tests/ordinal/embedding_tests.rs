use ndarray::{Array1, array};
use ordinal_rve::{RveError, WindowEmbedder};

#[test]
fn windows_without_delay_are_contiguous() {
    let signal = array![3.0, 1.0, 2.0, 5.0, 4.0, 6.0];
    let embedder = WindowEmbedder::new(signal.view(), 3, 1).unwrap();
    assert_eq!(embedder.window_length(), 3);
    assert_eq!(embedder.n_windows(), 4);

    let windows: Vec<Vec<f64>> = embedder.windows().map(|w| w.to_vec()).collect();
    assert_eq!(
        windows,
        vec![
            vec![3.0, 1.0, 2.0],
            vec![1.0, 2.0, 5.0],
            vec![2.0, 5.0, 4.0],
            vec![5.0, 4.0, 6.0],
        ]
    );
}

#[test]
fn delayed_windows_are_decimated() {
    let signal: Array1<f64> = (0..10).map(|i| i as f64).collect();
    // m=3, ε=4 -> L = 3*4 - 3 = 9
    let embedder = WindowEmbedder::new(signal.view(), 3, 4).unwrap();
    assert_eq!(embedder.window_length(), 9);
    assert_eq!(embedder.n_windows(), 2);
    assert_eq!(embedder.window(0).unwrap().to_vec(), vec![0.0, 4.0, 8.0]);
    assert_eq!(embedder.window(1).unwrap().to_vec(), vec![1.0, 5.0, 9.0]);
    assert!(embedder.window(2).is_none());
}

#[test]
fn every_window_has_m_points() {
    let signal: Array1<f64> = (0..200).map(|i| (i as f64).sin()).collect();
    for m in 2..=6 {
        for delay in 1..=7 {
            let embedder = WindowEmbedder::new(signal.view(), m, delay).unwrap();
            assert_eq!(embedder.window_length(), m * delay - (delay - 1));
            assert_eq!(embedder.windows().len(), signal.len() - embedder.window_length() + 1);
            assert!(embedder.windows().all(|w| w.len() == m));
        }
    }
}

#[test]
fn signal_exactly_one_window_long() {
    let signal = array![1.0, 2.0, 3.0, 4.0, 5.0];
    let embedder = WindowEmbedder::new(signal.view(), 3, 2).unwrap();
    assert_eq!(embedder.n_windows(), 1);
    assert_eq!(embedder.window(0).unwrap().to_vec(), vec![1.0, 3.0, 5.0]);
}

#[test]
fn too_short_signal_is_rejected() {
    let signal = array![1.0, 2.0, 3.0, 4.0];
    let err = WindowEmbedder::new(signal.view(), 3, 2).unwrap_err();
    assert_eq!(
        err,
        RveError::InsufficientData {
            context: "one embedding window",
            required: 5,
            available: 4,
        }
    );
}

#[test]
fn bad_embedding_parameters_are_rejected() {
    let signal: Array1<f64> = Array1::zeros(50);
    assert!(matches!(
        WindowEmbedder::new(signal.view(), 1, 1),
        Err(RveError::InvalidConfig { parameter: "embedding_dimension", .. })
    ));
    assert!(matches!(
        WindowEmbedder::new(signal.view(), 3, 0),
        Err(RveError::InvalidConfig { parameter: "embedding_delay", .. })
    ));
}

#[test]
fn delay_too_large_for_usize_is_rejected() {
    let signal: Array1<f64> = (0..100).map(|i| i as f64).collect();
    let err = WindowEmbedder::new(signal.view(), 4, usize::MAX / 2).unwrap_err();
    assert!(matches!(
        err,
        RveError::InsufficientData { required: usize::MAX, available: 100, .. }
    ));
}
