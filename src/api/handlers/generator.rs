// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse};
use log::{debug, warn};

use crate::api::types::{
    BulkPasswordRequest, BulkPasswordResponse, GeneratedPassword, PassphraseRequest,
    PassphraseResponse, PasswordRequest, PasswordResponse, PronounceablePasswordResponse,
    ReadablePasswordRequest, ReadablePasswordResponse,
};
use crate::api::utils::{bad_request, unprocessable};
use crate::api::AppState;
use crate::generators::{Charset, PasswordGenerator};
use crate::models::GeneratedCredential;

async fn maybe_check(state: &AppState, credential: GeneratedCredential, check: bool) -> GeneratedCredential {
    if !check {
        return credential;
    }
    let result = state.breach.check(&credential.value).await;
    if result.is_unknown() {
        debug!("Breach status of generated credential could not be determined");
    }
    credential.with_breach(result)
}

/// Generate a secure password
///
/// Draws every character uniformly from the alphabet selected by the flags.
#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "Generator",
    request_body = PasswordRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordResponse),
        (status = 400, description = "No usable character set", body = crate::api::types::ErrorResponse),
        (status = 422, description = "Invalid parameters", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<AppState>,
    body: web::Json<PasswordRequest>,
) -> HttpResponse {
    let request = body.into_inner();
    if let Err(detail) = request.validate() {
        return unprocessable(detail);
    }

    let charset = match Charset::build(&request.charset_options()) {
        Ok(charset) => charset,
        Err(e) => {
            warn!("Rejected password request: {}", e);
            return bad_request(e.to_string());
        }
    };

    let credential = PasswordGenerator::from_os().random(&charset, request.length);
    let credential = maybe_check(&state, credential, request.check_compromised).await;
    debug!(
        "Generated password: length={}, charset={}, entropy={:.2}",
        request.length,
        charset.len(),
        credential.entropy_bits
    );

    HttpResponse::Ok().json(PasswordResponse {
        generated: GeneratedPassword::from(&credential),
        charset_size: charset.len(),
        security_standard: request.security_standard,
    })
}

/// Generate multiple secure passwords
#[utoipa::path(
    post,
    path = "/api/generate/bulk",
    tag = "Generator",
    request_body = BulkPasswordRequest,
    responses(
        (status = 200, description = "Generated passwords", body = BulkPasswordResponse),
        (status = 400, description = "No usable character set", body = crate::api::types::ErrorResponse),
        (status = 422, description = "Invalid parameters", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn generate_bulk_passwords(
    state: web::Data<AppState>,
    body: web::Json<BulkPasswordRequest>,
) -> HttpResponse {
    let request = body.into_inner();
    if let Err(detail) = request.validate() {
        return unprocessable(detail);
    }

    let charset = match Charset::build(&request.password.charset_options()) {
        Ok(charset) => charset,
        Err(e) => {
            warn!("Rejected bulk password request: {}", e);
            return bad_request(e.to_string());
        }
    };

    let generated = PasswordGenerator::from_os().bulk(&charset, request.password.length, request.count);

    // Lookups run one after another; the shared limiter lets at most one
    // through per window, the rest come back unknown.
    let mut passwords = Vec::with_capacity(generated.len());
    for credential in generated {
        let credential = maybe_check(&state, credential, request.password.check_compromised).await;
        passwords.push(GeneratedPassword::from(&credential));
    }
    debug!("Generated {} passwords of length {}", passwords.len(), request.password.length);

    HttpResponse::Ok().json(BulkPasswordResponse {
        count: passwords.len(),
        passwords,
        charset_size: charset.len(),
        security_standard: request.password.security_standard,
    })
}

/// Generate a readable password (correct-horse-battery-staple style)
#[utoipa::path(
    post,
    path = "/api/generate/readable",
    tag = "Generator",
    request_body = ReadablePasswordRequest,
    responses(
        (status = 200, description = "Generated readable password", body = ReadablePasswordResponse),
        (status = 422, description = "Invalid parameters", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn generate_readable_password(
    state: web::Data<AppState>,
    body: web::Json<ReadablePasswordRequest>,
) -> HttpResponse {
    let request = body.into_inner();
    if let Err(detail) = request.validate() {
        return unprocessable(detail);
    }

    let credential = match PasswordGenerator::from_os().readable(&request.options()) {
        Ok(credential) => credential,
        Err(e) => return unprocessable(e.to_string()),
    };
    let credential = maybe_check(&state, credential, request.check_compromised).await;
    debug!("Generated readable password with {} words", request.word_count);

    HttpResponse::Ok().json(ReadablePasswordResponse {
        generated: GeneratedPassword::from(&credential),
        word_count: request.word_count,
        kind: "readable".to_string(),
    })
}

/// Generate a pronounceable password
///
/// Alternates consonants and vowels; digits overwrite up to two positions and
/// a symbol may be appended, so the result can be one character longer than
/// requested.
#[utoipa::path(
    post,
    path = "/api/generate/pronounceable",
    tag = "Generator",
    request_body = PasswordRequest,
    responses(
        (status = 200, description = "Generated pronounceable password", body = PronounceablePasswordResponse),
        (status = 422, description = "Invalid parameters", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn generate_pronounceable_password(
    state: web::Data<AppState>,
    body: web::Json<PasswordRequest>,
) -> HttpResponse {
    let request = body.into_inner();
    if let Err(detail) = request.validate() {
        return unprocessable(detail);
    }

    let credential = PasswordGenerator::from_os().pronounceable(&request.pronounceable_options());
    let credential = maybe_check(&state, credential, request.check_compromised).await;
    debug!("Generated pronounceable password of length {}", credential.length());

    HttpResponse::Ok().json(PronounceablePasswordResponse {
        generated: GeneratedPassword::from(&credential),
        kind: "pronounceable".to_string(),
    })
}

/// Generate a passphrase for MFA/SSH
#[utoipa::path(
    post,
    path = "/api/generate/passphrase",
    tag = "Generator",
    request_body = PassphraseRequest,
    responses(
        (status = 200, description = "Generated passphrase", body = PassphraseResponse),
        (status = 422, description = "Invalid parameters", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn generate_passphrase(
    state: web::Data<AppState>,
    body: web::Json<PassphraseRequest>,
) -> HttpResponse {
    let request = body.into_inner();
    if let Err(detail) = request.validate() {
        return unprocessable(detail);
    }

    let credential = PasswordGenerator::from_os().passphrase(&request.options());
    let credential = maybe_check(&state, credential, request.check_compromised).await;
    debug!("Generated passphrase of length {}", request.length);

    HttpResponse::Ok().json(PassphraseResponse::from(&credential))
}
