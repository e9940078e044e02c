use axum::Json;
use axum::extract::Path;
use serde::Serialize;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use verso_domain::constants::PERSON_TAG;

/// Person as of v1: a single display name.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(as = PersonV1)]
#[serde(rename_all = "camelCase")]
struct Person {
    id: String,
    name: String,
}

pub(crate) fn router<S>() -> OpenApiRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    OpenApiRouter::new().routes(routes!(list_people)).routes(routes!(get_person))
}

fn sample(id: &str, name: &str) -> Person {
    Person { id: id.to_owned(), name: name.to_owned() }
}

#[utoipa::path(
    get,
    path = "/api/v1/person",
    responses((status = OK, description = "Every known person, v1 shape", body = [Person])),
    tag = PERSON_TAG,
)]
async fn list_people() -> Json<Vec<Person>> {
    Json(vec![sample("1", "Mari Mets"), sample("2", "Jaan Kask")])
}

#[utoipa::path(
    get,
    path = "/api/v1/person/{id}",
    params(("id" = String, Path, description = "Person identifier")),
    responses((status = OK, description = "A single person, v1 shape", body = Person)),
    tag = PERSON_TAG,
)]
async fn get_person(Path(id): Path<String>) -> Json<Person> {
    Json(sample(&id, "Sample Person"))
}
