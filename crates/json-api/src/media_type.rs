//! Request media type enforcement.

use salvo::{
    http::{Method, header::CONTENT_LENGTH},
    prelude::*,
};

/// Rejects POST and PUT requests whose body is not declared as JSON.
///
/// A request carrying neither a `Content-Type` header nor a positive
/// `Content-Length` is treated as body-less and let through, so body-less
/// mutations such as clearing a cart do not need the header.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if matches!(*req.method(), Method::POST | Method::PUT) && !accepts_body(req) {
        res.render(
            StatusError::unsupported_media_type().brief("Content-Type must be application/json"),
        );

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

fn accepts_body(req: &Request) -> bool {
    match req.content_type() {
        Some(mime) => mime.subtype() == "json" || mime.suffix().is_some_and(|s| s == "json"),
        None => !declares_content(req),
    }
}

fn declares_content(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok())
        .is_some_and(|length| length > 0)
}
