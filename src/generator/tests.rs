#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::config::GeneratorConfig;
use crate::schema::{parse_model, TargetType};
use std::path::{Path, PathBuf};
use std::time::Duration;

const BLOG_SCHEMA: &str = r#"
model BlogPost {
  id          Int       @id @default(autoincrement())
  title       String
  authorEmail String
  rating      Float?
  published   Boolean   @default(false)
  tags        String[]
  metadata    Json?
  createdAt   DateTime  @default(now())
  createdById Int
  createdBy   User      @relation(fields: [createdById], references: [id])
  comments    Comment[]
}
"#;

fn blog_context(config: &GeneratorConfig) -> GenerationContext {
    let parsed = parse_model("BlogPost", BLOG_SCHEMA).unwrap();
    GenerationContext::new("BlogPost", &parsed, None, config)
}

#[test]
fn test_to_class_name() {
    assert_eq!(to_class_name("blogPost"), "BlogPost");
    assert_eq!(to_class_name("User"), "User");
    assert_eq!(to_class_name(""), "");
}

#[test]
fn test_to_file_name() {
    assert_eq!(to_file_name("BlogPost"), "blogPost");
    assert_eq!(to_file_name("user"), "user");
}

#[test]
fn test_to_kebab_case() {
    assert_eq!(to_kebab_case("User"), "user");
    assert_eq!(to_kebab_case("BlogPost"), "blog-post");
    assert_eq!(to_kebab_case("HTTPServer"), "http-server");
    assert_eq!(to_kebab_case("User2FA"), "user2-fa");
    assert_eq!(to_kebab_case("ABcDe"), "a-bc-de");
}

#[test]
fn test_context_names_and_flags() {
    let ctx = blog_context(&GeneratorConfig::default());
    assert_eq!(ctx.class_name, "BlogPost");
    assert_eq!(ctx.file_name, "blogPost");
    assert_eq!(ctx.folder_name, "blog-post");
    assert!(ctx.has_created_by);
    assert!(!ctx.is_protected);
    assert!(ctx.id_is_numeric);
    assert_eq!(ctx.id_ts_type, "number");
    assert_eq!(ctx.audit_assignment, "createdById: userId");
}

#[test]
fn test_context_dto_fields_exclude_managed_and_audit() {
    let ctx = blog_context(&GeneratorConfig::default());
    let all: Vec<&str> = ctx.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        all,
        vec![
            "id",
            "title",
            "authorEmail",
            "rating",
            "published",
            "tags",
            "metadata",
            "createdAt",
            "createdById"
        ]
    );
    let dto: Vec<&str> = ctx.dto_fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        dto,
        vec!["title", "authorEmail", "rating", "published", "tags", "metadata"]
    );
    assert_eq!(
        ctx.validator_imports,
        vec![
            "IsBoolean",
            "IsEmail",
            "IsNumber",
            "IsObject",
            "IsOptional",
            "IsString"
        ]
    );
}

#[test]
fn test_context_relation_only_audit_field() {
    let parsed = parse_model("Note", "model Note {\n  id String\n  createdBy User\n}").unwrap();
    let ctx = GenerationContext::new("Note", &parsed, None, &GeneratorConfig::default());
    assert_eq!(ctx.audit_assignment, "createdBy: { connect: { id: userId } }");
    assert_eq!(ctx.audit_key_ts_type, "number");
    assert!(!ctx.id_is_numeric);
    assert_eq!(ctx.id_ts_type, "string");

    let ctx = GenerationContext::new(
        "Note",
        &parsed,
        Some(TargetType::String),
        &GeneratorConfig::default(),
    );
    assert_eq!(ctx.audit_key_ts_type, "string");
}

#[test]
fn test_string_audit_key_renders_string_user_id() {
    let parsed = parse_model(
        "Doc",
        "model Doc {\n  id String\n  title String\n  createdById String\n}",
    )
    .unwrap();
    // A scalar key wins over any relation target type
    let ctx = GenerationContext::new(
        "Doc",
        &parsed,
        Some(TargetType::Number),
        &GeneratorConfig::default(),
    );
    assert_eq!(ctx.audit_key_ts_type, "string");

    let service = Artifact::Service.render(&ctx).unwrap();
    assert!(service.contains("create(dto: CreateDocDto, userId: string) {"));
    assert!(service.contains("data: { ...dto, createdById: userId },"));
    let controller = Artifact::Controller.render(&ctx).unwrap();
    assert!(controller.contains("@Req() req: { user: { id: string } }"));
    assert!(!controller.contains("id: number"));
}

#[test]
fn test_protected_model_flag() {
    let mut config = GeneratorConfig::default();
    config.protected_models = vec!["BlogPost".to_string()];
    let ctx = blog_context(&config);
    assert!(ctx.is_protected);

    let controller = Artifact::Controller.render(&ctx).unwrap();
    assert_eq!(controller.matches("@UseGuards(JwtAuthGuard)").count(), 3);
    assert!(controller.contains("import { JwtAuthGuard } from '../auth/jwt-auth.guard';"));
}

#[test]
fn test_render_create_dto() {
    let ctx = blog_context(&GeneratorConfig::default());
    let dto = Artifact::CreateDto.render(&ctx).unwrap();
    assert!(dto.starts_with(
        "import { IsBoolean, IsEmail, IsNumber, IsObject, IsOptional, IsString } from 'class-validator';"
    ));
    assert!(dto.contains("export class CreateBlogPostDto {"));
    assert!(dto.contains(
        "  @IsOptional()\n  @IsNumber({}, { message: 'Rating must be a float.' })\n  rating?: number;"
    ));
    assert!(dto.contains("  tags: string[];"));
    assert!(dto.contains("  metadata?: any;"));
    assert!(!dto.contains("createdById"));
    assert!(!dto.contains("comments"));

    // Declaration order is preserved
    let title = dto.find("title:").unwrap();
    let rating = dto.find("rating?:").unwrap();
    let published = dto.find("published:").unwrap();
    assert!(title < rating && rating < published);
}

#[test]
fn test_render_service_and_controller_audit_wiring() {
    let ctx = blog_context(&GeneratorConfig::default());
    let service = Artifact::Service.render(&ctx).unwrap();
    assert!(service.contains("create(dto: CreateBlogPostDto, userId: number)"));
    assert!(service.contains("data: { ...dto, createdById: userId },"));
    assert!(service.contains("this.prisma.blogPost.findMany()"));

    let controller = Artifact::Controller.render(&ctx).unwrap();
    assert!(controller.contains("@Controller('blog-post')"));
    assert!(controller.contains("return this.blogPostService.create(dto, req.user.id);"));
    assert!(controller.contains("@Param('id', ParseIntPipe) id: number"));
    assert!(!controller.contains("UseGuards"));
}

#[test]
fn test_render_without_audit_fields() {
    let parsed = parse_model("Tag", "model Tag {\n  id Int\n  label String\n}").unwrap();
    let ctx = GenerationContext::new("Tag", &parsed, None, &GeneratorConfig::default());
    let service = Artifact::Service.render(&ctx).unwrap();
    assert!(service.contains("create(dto: CreateTagDto) {"));
    assert!(!service.contains("userId"));
    let controller = Artifact::Controller.render(&ctx).unwrap();
    assert!(!controller.contains("@Req()"));
}

#[test]
fn test_render_module_update_and_views() {
    let ctx = blog_context(&GeneratorConfig::default());
    let module = Artifact::Module.render(&ctx).unwrap();
    assert!(module.contains("controllers: [BlogPostController, BlogPostViewsController],"));
    assert!(module.contains("export class BlogPostModule {}"));

    let update = Artifact::UpdateDto.render(&ctx).unwrap();
    assert!(update.contains(
        "export class UpdateBlogPostDto extends PartialType(CreateBlogPostDto) {}"
    ));
    assert!(update.contains("from './create-blog-post.dto';"));

    let views = Artifact::ViewsController.render(&ctx).unwrap();
    assert!(views.contains("@Controller('views/blog-post')"));
    assert!(views.contains("@Render('blog-post/index')"));
    assert!(views.contains("'id', 'title', 'authorEmail'"));
}

#[test]
fn test_render_is_deterministic() {
    let ctx = blog_context(&GeneratorConfig::default());
    for artifact in Artifact::ALL {
        assert_eq!(
            artifact.render(&ctx).unwrap(),
            artifact.render(&ctx).unwrap(),
            "{}",
            artifact.template_name()
        );
    }
}

#[test]
fn test_relative_paths() {
    let paths: Vec<PathBuf> = Artifact::ALL
        .iter()
        .map(|a| a.relative_path("blog-post"))
        .collect();
    assert_eq!(
        paths,
        vec![
            PathBuf::from("blog-post.controller.ts"),
            PathBuf::from("blog-post.service.ts"),
            PathBuf::from("blog-post.module.ts"),
            Path::new("dto").join("create-blog-post.dto.ts"),
            Path::new("dto").join("update-blog-post.dto.ts"),
            Path::new("views").join("views.controller.ts"),
        ]
    );
}

#[tokio::test]
async fn test_bounded_times_out() {
    fn never(path: PathBuf, source: std::io::Error) -> crate::error::GenerateError {
        crate::error::GenerateError::ArtifactWrite { path, source }
    }
    let err = bounded(
        Path::new("slow"),
        Duration::from_millis(10),
        std::future::pending::<std::io::Result<()>>(),
        never,
    )
    .await
    .unwrap_err();
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_write_artifacts_creates_tree() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = blog_context(&GeneratorConfig::default());
    let written = write_artifacts(&ctx, dir.path(), Duration::from_secs(5))
        .await
        .unwrap();
    assert_eq!(written.len(), Artifact::ALL.len());
    for path in &written {
        assert!(path.is_file(), "{path:?}");
        assert!(path.starts_with(dir.path().join("blog-post")));
    }
}
