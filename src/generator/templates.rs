use askama::Template;
use std::path::PathBuf;

use super::context::GenerationContext;
use crate::error::GenerateError;

/// Template data for the REST controller
#[derive(Template)]
#[template(path = "controller.ts.txt", escape = "none")]
pub struct ControllerTemplate<'a> {
    pub ctx: &'a GenerationContext,
}

/// Template data for the Prisma-backed service
#[derive(Template)]
#[template(path = "service.ts.txt", escape = "none")]
pub struct ServiceTemplate<'a> {
    pub ctx: &'a GenerationContext,
}

/// Template data for the Nest module wiring controller, views and service
#[derive(Template)]
#[template(path = "module.ts.txt", escape = "none")]
pub struct ModuleTemplate<'a> {
    pub ctx: &'a GenerationContext,
}

/// Template data for the create DTO with class-validator decorators
#[derive(Template)]
#[template(path = "create-dto.ts.txt", escape = "none")]
pub struct CreateDtoTemplate<'a> {
    pub ctx: &'a GenerationContext,
}

/// Template data for the update DTO (partial of the create DTO)
#[derive(Template)]
#[template(path = "update-dto.ts.txt", escape = "none")]
pub struct UpdateDtoTemplate<'a> {
    pub ctx: &'a GenerationContext,
}

/// Template data for the server-rendered views controller
#[derive(Template)]
#[template(path = "views-controller.ts.txt", escape = "none")]
pub struct ViewsControllerTemplate<'a> {
    pub ctx: &'a GenerationContext,
}

/// One generated file. The set is fixed and identical for every model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Controller,
    Service,
    Module,
    CreateDto,
    UpdateDto,
    ViewsController,
}

impl Artifact {
    /// Render and write order.
    pub const ALL: [Artifact; 6] = [
        Artifact::Controller,
        Artifact::Service,
        Artifact::Module,
        Artifact::CreateDto,
        Artifact::UpdateDto,
        Artifact::ViewsController,
    ];

    pub const fn template_name(self) -> &'static str {
        match self {
            Artifact::Controller => "controller",
            Artifact::Service => "service",
            Artifact::Module => "module",
            Artifact::CreateDto => "create-dto",
            Artifact::UpdateDto => "update-dto",
            Artifact::ViewsController => "views-controller",
        }
    }

    /// Path relative to `<outputDir>/<folder>/`.
    pub fn relative_path(self, folder: &str) -> PathBuf {
        match self {
            Artifact::Controller => PathBuf::from(format!("{folder}.controller.ts")),
            Artifact::Service => PathBuf::from(format!("{folder}.service.ts")),
            Artifact::Module => PathBuf::from(format!("{folder}.module.ts")),
            Artifact::CreateDto => PathBuf::from("dto").join(format!("create-{folder}.dto.ts")),
            Artifact::UpdateDto => PathBuf::from("dto").join(format!("update-{folder}.dto.ts")),
            Artifact::ViewsController => PathBuf::from("views").join("views.controller.ts"),
        }
    }

    /// Render this artifact for `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Render`] if askama fails.
    pub fn render(self, ctx: &GenerationContext) -> Result<String, GenerateError> {
        let rendered = match self {
            Artifact::Controller => ControllerTemplate { ctx }.render(),
            Artifact::Service => ServiceTemplate { ctx }.render(),
            Artifact::Module => ModuleTemplate { ctx }.render(),
            Artifact::CreateDto => CreateDtoTemplate { ctx }.render(),
            Artifact::UpdateDto => UpdateDtoTemplate { ctx }.render(),
            Artifact::ViewsController => ViewsControllerTemplate { ctx }.render(),
        };
        rendered.map_err(|source| GenerateError::Render {
            template: self.template_name(),
            source,
        })
    }
}
