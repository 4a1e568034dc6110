use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // user-correctable
    #[error("validation failed")]
    Validation(Vec<String>),
    #[error("User not found")]
    NotFound,
    #[error("Password Incorrect")]
    PasswordIncorrect,
    #[error("Invalid Token")]
    InvalidToken,

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        match &e {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(e),
        }
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(e: bcrypt::BcryptError) -> Self {
        AppError::Internal(format!("password hashing failed: {}", e))
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        AppError::Internal(format!("token signing failed: {}", e))
    }
}

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct ErrorsBody<'a> {
    errors: &'a [String],
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::PasswordIncorrect | Self::InvalidToken => StatusCode::FORBIDDEN,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Validation(errors) => {
                HttpResponse::build(self.status_code()).json(ErrorsBody { errors })
            }
            Self::NotFound => HttpResponse::build(self.status_code()).json(MessageBody {
                message: "User not found",
            }),
            Self::PasswordIncorrect => HttpResponse::build(self.status_code()).json(MessageBody {
                message: "Password Incorrect",
            }),
            Self::InvalidToken => HttpResponse::build(self.status_code()).json(MessageBody {
                message: "Invalid Token",
            }),
            Self::Db(e) => {
                log::error!("database error: {}", e);
                HttpResponse::build(self.status_code()).json(MessageBody {
                    message: "Internal server error",
                })
            }
            Self::Internal(e) => {
                log::error!("{}", e);
                HttpResponse::build(self.status_code()).json(MessageBody {
                    message: "Internal server error",
                })
            }
        }
    }
}
