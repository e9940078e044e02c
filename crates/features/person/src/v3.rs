use axum::Json;
use axum::extract::Path;
use serde::Serialize;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use verso_domain::constants::PERSON_TAG;

/// Person as of v3: v2 plus an email address.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(as = PersonV3)]
#[serde(rename_all = "camelCase")]
struct Person {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
}

pub(crate) fn router<S>() -> OpenApiRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    OpenApiRouter::new().routes(routes!(list_people)).routes(routes!(get_person))
}

fn sample(id: &str, first_name: &str, last_name: &str) -> Person {
    Person {
        id: id.to_owned(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: format!("{}.{}@example.com", first_name.to_lowercase(), last_name.to_lowercase()),
    }
}

#[utoipa::path(
    get,
    path = "/api/v3/person",
    responses((status = OK, description = "Every known person, v3 shape", body = [Person])),
    tag = PERSON_TAG,
)]
async fn list_people() -> Json<Vec<Person>> {
    Json(vec![sample("1", "Mari", "Mets"), sample("2", "Jaan", "Kask")])
}

#[utoipa::path(
    get,
    path = "/api/v3/person/{id}",
    params(("id" = String, Path, description = "Person identifier")),
    responses((status = OK, description = "A single person, v3 shape", body = Person)),
    tag = PERSON_TAG,
)]
async fn get_person(Path(id): Path<String>) -> Json<Person> {
    Json(sample(&id, "Sample", "Person"))
}
