use crate::build_info::BuildInfo;
use crate::routing::pattern::VersionedPath;
use utoipa::openapi::external_docs::ExternalDocsBuilder;
use utoipa::openapi::path::{Parameter, ParameterBuilder, ParameterIn};
use utoipa::openapi::schema::{ObjectBuilder, Type};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityRequirement, SecurityScheme};
use utoipa::openapi::{Components, InfoBuilder, OpenApi, Required};
use verso_domain::config::DocsConfig;
use verso_domain::constants::{
    BEARER_SCHEME, DOCS_HEADER_DEFAULT, HEADER_APPLICATION_ID, HEADER_USER_ID, SECURED_RESOURCE,
};

/// Applies the service-wide documentation conventions to the generated document.
///
/// * `info` carries the configured title, the binary's version and the build
///   timestamp appended to the description.
/// * `externalDocs` points at the project repository.
/// * Every versioned operation documents the required caller-identification
///   headers; operations on the secured resource additionally declare the
///   bearer requirement. Declaration only, nothing here enforces tokens.
pub fn decorate(doc: &mut OpenApi, cfg: &DocsConfig, build: &BuildInfo) {
    doc.info = InfoBuilder::new()
        .title(cfg.title.clone())
        .version(build.version.clone())
        .description(Some(format!(
            "{}\n\nBuild time (UTC): {}",
            cfg.description, build.build_time
        )))
        .build();

    doc.external_docs = Some(
        ExternalDocsBuilder::new()
            .url(cfg.repository_url.clone())
            .description(Some("Project repository".to_owned()))
            .build(),
    );

    doc.components.get_or_insert_with(Components::default).add_security_scheme(
        BEARER_SCHEME,
        SecurityScheme::Http(
            HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build(),
        ),
    );

    for (path, item) in &mut doc.paths.paths {
        let Some(versioned) = VersionedPath::split(path) else {
            continue;
        };
        let secured = versioned.tail.split('/').next() == Some(SECURED_RESOURCE);

        let operations = [
            &mut item.get,
            &mut item.put,
            &mut item.post,
            &mut item.delete,
            &mut item.options,
            &mut item.head,
            &mut item.patch,
            &mut item.trace,
        ];

        for operation in operations.into_iter().flatten() {
            let parameters = operation.parameters.get_or_insert_default();
            parameters.insert(0, caller_header(HEADER_USER_ID));
            parameters.insert(0, caller_header(HEADER_APPLICATION_ID));

            if secured {
                operation
                    .security
                    .get_or_insert_default()
                    .push(SecurityRequirement::new(BEARER_SCHEME, Vec::<String>::new()));
            }
        }
    }
}

fn caller_header(name: &str) -> Parameter {
    ParameterBuilder::new()
        .name(name)
        .parameter_in(ParameterIn::Header)
        .required(Required::True)
        .schema(Some(
            ObjectBuilder::new()
                .schema_type(Type::String)
                .default(Some(serde_json::Value::from(DOCS_HEADER_DEFAULT))),
        ))
        .build()
}
