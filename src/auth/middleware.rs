use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorInternalServerError,
    web, Error, HttpMessage,
};
use futures::future::LocalBoxFuture;

use crate::{
    app_state::AppState,
    auth::session::resolve_session,
    guards::session_guard,
    middleware::get_request_id,
};

/// Resolves the caller's session for every request and applies the session
/// guard before any handler runs.
pub struct SessionMiddleware;

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct SessionMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let state = req
                .app_data::<web::Data<AppState>>()
                .cloned()
                .ok_or_else(|| ErrorInternalServerError("Application state not configured"))?;

            let session = resolve_session(
                req.request(),
                &state.jwt_service,
                &state.config.session_cookie_name,
            );

            let target = session_guard::request_target(req.request());

            let navigation = session_guard::check(&target, session.as_ref());
            if let Some(response) = navigation.redirect_response() {
                log::debug!(
                    "[{}] No session for {}, {:?}",
                    get_request_id(req.request()).as_deref().unwrap_or("-"),
                    target,
                    navigation
                );
                return Ok(req.into_response(response).map_into_right_body());
            }

            if let Some(session) = session {
                req.extensions_mut().insert(session);
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
