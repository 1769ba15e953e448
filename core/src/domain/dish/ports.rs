use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dish::{
        entities::{BeginGeneration, Dish, DishUpdate},
        value_objects::{
            DishImageDownload, GenerateAllInput, GenerateAllReport, GenerateDishImageInput,
            GenerationOutcome, ImageGenerationRequest, ParseMenuInput, ParsedDish,
            SetDishAspectRatioInput, UploadDishImageInput,
        },
    },
};

/// In-memory store of the current ordered sequence of dishes.
#[cfg_attr(test, mockall::automock)]
pub trait DishRepository: Send + Sync + 'static {
    fn list(&self) -> impl Future<Output = Vec<Dish>> + Send;

    fn get_by_id(&self, dish_id: Uuid) -> impl Future<Output = Option<Dish>> + Send;

    /// Discards the current contents and installs `dishes` in order.
    fn replace_all(&self, dishes: Vec<Dish>) -> impl Future<Output = ()> + Send;

    /// Applies `update` to the matching dish. `None` when the id is unknown.
    fn update_by_id(
        &self,
        dish_id: Uuid,
        update: DishUpdate,
    ) -> impl Future<Output = Option<Dish>> + Send;

    /// Sets `is_generating` unless the dish is missing or already generating.
    fn begin_generation(&self, dish_id: Uuid) -> impl Future<Output = BeginGeneration> + Send;

    fn clear(&self) -> impl Future<Output = ()> + Send;
}

/// Client for the external text/image model.
#[cfg_attr(test, mockall::automock)]
pub trait GenerationClient: Send + Sync + 'static {
    /// Extracts `{name, description}` records from menu text, in menu order.
    fn parse_menu(
        &self,
        text: String,
    ) -> impl Future<Output = Result<Vec<ParsedDish>, CoreError>> + Send;

    /// Renders one dish photo and returns it as a data URI.
    fn generate_dish_image(
        &self,
        request: ImageGenerationRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Applies a natural-language instruction to an existing data URI image.
    fn edit_dish_image(
        &self,
        image: String,
        instruction: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the dish lifecycle workflows
#[cfg_attr(test, mockall::automock)]
pub trait DishService: Send + Sync {
    fn parse_menu(
        &self,
        input: ParseMenuInput,
    ) -> impl Future<Output = Result<Vec<Dish>, CoreError>> + Send;

    fn list_dishes(&self) -> impl Future<Output = Vec<Dish>> + Send;

    fn get_dish(&self, dish_id: Uuid) -> impl Future<Output = Result<Dish, CoreError>> + Send;

    fn clear_dishes(&self) -> impl Future<Output = ()> + Send;

    fn generate_dish_image(
        &self,
        input: GenerateDishImageInput,
    ) -> impl Future<Output = Result<GenerationOutcome, CoreError>> + Send;

    /// Ids of the dishes "generate all" would request, from a snapshot of the store.
    fn plan_generate_all(&self) -> impl Future<Output = Vec<Uuid>> + Send;

    fn generate_dishes(
        &self,
        dish_ids: Vec<Uuid>,
        input: GenerateAllInput,
    ) -> impl Future<Output = GenerateAllReport> + Send;

    fn generate_all_missing(
        &self,
        input: GenerateAllInput,
    ) -> impl Future<Output = GenerateAllReport> + Send;

    fn upload_dish_image(
        &self,
        input: UploadDishImageInput,
    ) -> impl Future<Output = Result<Option<Dish>, CoreError>> + Send;

    fn download_dish_image(
        &self,
        dish_id: Uuid,
    ) -> impl Future<Output = Result<DishImageDownload, CoreError>> + Send;

    fn set_dish_aspect_ratio(
        &self,
        input: SetDishAspectRatioInput,
    ) -> impl Future<Output = Result<Option<Dish>, CoreError>> + Send;
}
