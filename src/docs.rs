use utoipa::OpenApi;
use crate::common::response::ErrorBody;
use crate::modules::generation::dto::{GenerateVideoRequest, GenerateVideoResponse};
use crate::modules::generation::model::{VideoStyle, VoiceOption};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::generation::handler::generate_video,
    ),
    components(
        schemas(
            GenerateVideoRequest, GenerateVideoResponse, ErrorBody,
            VideoStyle, VoiceOption,
        )
    ),
    tags(
        (name = "Generation", description = "AI video generation proxy")
    )
)]
pub struct ApiDoc;
