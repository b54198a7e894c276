use guardian_ward::{AudioCapture, AudioStreamConfig, CaptureFactory, MemoryCapture};

#[tokio::test]
async fn capture_records_the_running_stream() {
    let mut capture = MemoryCapture::new();

    assert!(!capture.is_streaming());
    assert!(capture.stream_config().is_none());

    let started = capture.start_capture(&AudioStreamConfig::default()).await.unwrap();
    assert!(started);
    assert!(capture.is_streaming());
    assert_eq!(capture.stream_config(), Some(&AudioStreamConfig::default()));
}

#[tokio::test]
async fn repeated_start_keeps_the_original_stream() {
    let mut capture = MemoryCapture::new();

    let first = AudioStreamConfig::default();
    let mut second = AudioStreamConfig::default();
    second.sample_rate = 48000;

    assert!(capture.start_capture(&first).await.unwrap());
    assert!(capture.start_capture(&second).await.unwrap());

    // First stream wins until the capture is stopped.
    assert_eq!(capture.stream_config(), Some(&first));
}

#[tokio::test]
async fn stop_releases_the_stream() {
    let mut capture = MemoryCapture::new();

    assert!(capture.start_capture(&AudioStreamConfig::default()).await.unwrap());
    capture.stop_capture().await.unwrap();

    assert!(!capture.is_streaming());
    assert!(capture.stream_config().is_none());

    // Stopping again is harmless.
    capture.stop_capture().await.unwrap();
}

#[tokio::test]
async fn capture_restarts_with_new_params() {
    let mut capture = MemoryCapture::new();

    assert!(capture.start_capture(&AudioStreamConfig::default()).await.unwrap());
    capture.stop_capture().await.unwrap();

    let mut hifi = AudioStreamConfig::default();
    hifi.sample_rate = 44100;
    hifi.bit_rate = 128000;
    assert!(capture.start_capture(&hifi).await.unwrap());

    assert_eq!(capture.stream_config(), Some(&hifi));
}

#[test]
fn factory_detects_a_backend() {
    let capture = CaptureFactory::detect();
    assert!(capture.is_available());
}
