use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use image::RgbaImage;
use tower::Service;

use crate::analysis::RasterView;
use crate::error::AppError;
use crate::signals::UserInput;

use super::engine::{StyleReport, UndertoneEngine};

/// One quiz submission: a decoded photo plus optional answers.
#[derive(Debug, Clone)]
pub struct QuizRequest {
    pub image: RgbaImage,
    pub user: Option<UserInput>,
}

impl QuizRequest {
    pub fn new(image: RgbaImage) -> Self {
        Self { image, user: None }
    }

    pub fn with_user(mut self, user: UserInput) -> Self {
        self.user = Some(user);
        self
    }
}

/// `tower` adapter around [`UndertoneEngine`].
///
/// The work is synchronous; the returned future is already resolved.
#[derive(Clone)]
pub struct ClassificationService {
    engine: Arc<UndertoneEngine>,
}

impl ClassificationService {
    pub fn new(engine: Arc<UndertoneEngine>) -> Self {
        Self { engine }
    }

    fn classify(&self, request: &QuizRequest) -> Result<StyleReport, AppError> {
        let raster = RasterView::from_rgba(&request.image)?;
        Ok(self.engine.classify(&raster, request.user.as_ref()))
    }
}

impl Service<QuizRequest> for ClassificationService {
    type Response = StyleReport;
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), AppError>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: QuizRequest) -> Self::Future {
        let result = self.classify(&request);
        if let Err(e) = &result {
            tracing::error!("Rejected quiz request: {}", e);
        }

        Box::pin(async move { result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fusion::Undertone;
    use crate::palette::ColorSeason;
    use crate::signals::VeinColor;
    use image::Rgba;
    use tower::ServiceExt;

    fn service() -> ClassificationService {
        ClassificationService::new(Arc::new(UndertoneEngine::default()))
    }

    #[tokio::test]
    async fn test_service_classifies_request() {
        let image = RgbaImage::from_pixel(12, 12, Rgba([220, 150, 120, 255]));
        let report = service().oneshot(QuizRequest::new(image)).await.unwrap();

        assert_eq!(report.classification.undertone, Undertone::Warm);
        assert_eq!(report.season, ColorSeason::Spring);
    }

    #[tokio::test]
    async fn test_service_passes_user_answers() {
        let image = RgbaImage::from_pixel(4, 4, Rgba([30, 30, 200, 255]));
        let request =
            QuizRequest::new(image).with_user(UserInput::with_vein_color(VeinColor::Blue));
        let report = service().oneshot(request).await.unwrap();

        assert!(report.classification.scores.cool > report.classification.scores.warm);
        assert_eq!(report.season, ColorSeason::Summer);
    }

    #[tokio::test]
    async fn test_service_rejects_empty_image() {
        let request = QuizRequest::new(RgbaImage::new(0, 0));
        let err = service().oneshot(request).await.unwrap_err();
        assert!(matches!(err, AppError::Raster(_)));
    }

    #[tokio::test]
    async fn test_reports_get_distinct_ids() {
        let mut svc = service();
        let image = RgbaImage::from_pixel(2, 2, Rgba([220, 150, 120, 255]));

        let first = svc
            .ready()
            .await
            .unwrap()
            .call(QuizRequest::new(image.clone()))
            .await
            .unwrap();
        let second = svc
            .ready()
            .await
            .unwrap()
            .call(QuizRequest::new(image))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.classification, second.classification);
    }
}
