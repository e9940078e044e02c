use axum::Json;
use axum::extract::Path;
use serde::Serialize;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use verso_domain::constants::PERSON_TAG;

/// Person as of v2: the display name split into first and last.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(as = PersonV2)]
#[serde(rename_all = "camelCase")]
struct Person {
    id: String,
    first_name: String,
    last_name: String,
}

pub(crate) fn router<S>() -> OpenApiRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    OpenApiRouter::new()
        .routes(routes!(list_people))
        .routes(routes!(get_person))
        .routes(routes!(get_first_person))
}

fn sample(id: &str, first_name: &str, last_name: &str) -> Person {
    Person { id: id.to_owned(), first_name: first_name.to_owned(), last_name: last_name.to_owned() }
}

#[utoipa::path(
    get,
    path = "/api/v2/person",
    responses((status = OK, description = "Every known person, v2 shape", body = [Person])),
    tag = PERSON_TAG,
)]
async fn list_people() -> Json<Vec<Person>> {
    Json(vec![sample("1", "Mari", "Mets"), sample("2", "Jaan", "Kask")])
}

#[utoipa::path(
    get,
    path = "/api/v2/person/{id}",
    params(("id" = String, Path, description = "Person identifier")),
    responses((status = OK, description = "A single person, v2 shape", body = Person)),
    tag = PERSON_TAG,
)]
async fn get_person(Path(id): Path<String>) -> Json<Person> {
    Json(sample(&id, "Sample", "Person"))
}

/// The literal sibling of `/api/v2/person/{id}`; the router prefers the
/// static segment, so id `1` is always this canonical record.
#[utoipa::path(
    get,
    path = "/api/v2/person/1",
    responses((status = OK, description = "The canonical first person", body = Person)),
    tag = PERSON_TAG,
)]
async fn get_first_person() -> Json<Person> {
    Json(sample("1", "Mari", "Mets"))
}
