use axum::body::Body;
use axum::http::Request;
use criterion::{Criterion, criterion_group, criterion_main};
use detection::{Detector, StaticDetector};
use tower::ServiceExt;

fn bench_static_detector(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let detector = StaticDetector::new();

    c.bench_function("detection/static_detector", |b| {
        b.to_async(&rt)
            .iter(|| async move { detector.detect().await.unwrap() });
    });
}

fn bench_detect_route(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let app = api::create_app(api::create_default_state());

    c.bench_function("api/get_detect", |b| {
        b.to_async(&rt).iter(|| {
            let app = app.clone();
            async move {
                let response = app
                    .oneshot(
                        Request::builder()
                            .uri("/detect")
                            .body(Body::empty())
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                axum::body::to_bytes(response.into_body(), usize::MAX)
                    .await
                    .unwrap()
            }
        });
    });
}

criterion_group!(benches, bench_static_detector, bench_detect_route);
criterion_main!(benches);
