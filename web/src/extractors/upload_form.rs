use super::rejected;
use crate::Error;
use axum::extract::{FromRequest, Multipart, Request};

/// `Multipart` whose rejection (ex. a missing `multipart/form-data` content type) is
/// reported as `422 {"detail": ..}`.
pub(crate) struct UploadForm(pub(crate) Multipart);

impl<S> FromRequest<S> for UploadForm
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Multipart::from_request(req, state)
            .await
            .map(Self)
            .map_err(|rejection| rejected(rejection.status(), rejection.body_text()))
    }
}
