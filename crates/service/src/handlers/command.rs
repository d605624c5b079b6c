//! Command handlers.
//!
//! Each handler owns its unit-of-work scope: begin, mutate through the
//! repository, then commit or roll back. The bus harvests buffered events
//! afterwards; handlers never enqueue anything themselves.

use async_trait::async_trait;
use domain::{Command, User};

use crate::error::ServiceError;
use crate::uow::UserUnitOfWork;

/// Executes exactly one command type against the unit of work.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, command: Command, uow: &dyn UserUnitOfWork) -> Result<(), ServiceError>;
}

/// Handles `CreateUser`: registers a new aggregate and commits.
pub struct CreateUserHandler;

#[async_trait]
impl CommandHandler for CreateUserHandler {
    async fn handle(&self, command: Command, uow: &dyn UserUnitOfWork) -> Result<(), ServiceError> {
        let name = command.name();
        let Command::CreateUser(cmd) = command else {
            return Err(ServiceError::WrongMessageType {
                handler: "CreateUserHandler",
                message: name,
            });
        };

        uow.begin().await?;
        let user = User::register(cmd.profile, &cmd.password);
        tracing::info!(user_id = %user.id(), "creating user");
        if let Err(error) = uow.users().add(user).await {
            uow.rollback().await?;
            return Err(error.into());
        }
        uow.commit().await?;
        Ok(())
    }
}

/// Handles `DeleteUser`: removes the aggregate and commits.
pub struct DeleteUserHandler;

#[async_trait]
impl CommandHandler for DeleteUserHandler {
    async fn handle(&self, command: Command, uow: &dyn UserUnitOfWork) -> Result<(), ServiceError> {
        let name = command.name();
        let Command::DeleteUser(cmd) = command else {
            return Err(ServiceError::WrongMessageType {
                handler: "DeleteUserHandler",
                message: name,
            });
        };

        uow.begin().await?;
        tracing::info!(user_id = %cmd.user_id, "deleting user");
        if let Err(error) = uow.users().remove(cmd.user_id).await {
            uow.rollback().await?;
            return Err(error.into());
        }
        uow.commit().await?;
        Ok(())
    }
}

/// Handles `UpdateCredentialsStatus`: records the auth service's verdict.
pub struct UpdateCredentialsStatusHandler;

#[async_trait]
impl CommandHandler for UpdateCredentialsStatusHandler {
    async fn handle(&self, command: Command, uow: &dyn UserUnitOfWork) -> Result<(), ServiceError> {
        let name = command.name();
        let Command::UpdateCredentialsStatus(cmd) = command else {
            return Err(ServiceError::WrongMessageType {
                handler: "UpdateCredentialsStatusHandler",
                message: name,
            });
        };

        uow.begin().await?;
        tracing::info!(user_id = %cmd.user_id, status = %cmd.status, "updating credentials status");
        if let Err(error) = uow
            .users()
            .update_credentials_status(cmd.user_id, cmd.status)
            .await
        {
            uow.rollback().await?;
            return Err(error.into());
        }
        uow.commit().await?;
        Ok(())
    }
}

/// Handles `UpdateUserPhoto`: replaces the profile photo.
pub struct UpdateUserPhotoHandler;

#[async_trait]
impl CommandHandler for UpdateUserPhotoHandler {
    async fn handle(&self, command: Command, uow: &dyn UserUnitOfWork) -> Result<(), ServiceError> {
        let name = command.name();
        let Command::UpdateUserPhoto(cmd) = command else {
            return Err(ServiceError::WrongMessageType {
                handler: "UpdateUserPhotoHandler",
                message: name,
            });
        };

        uow.begin().await?;
        if let Err(error) = uow.users().update_photo(cmd.user_id, cmd.photo).await {
            uow.rollback().await?;
            return Err(error.into());
        }
        uow.commit().await?;
        Ok(())
    }
}
