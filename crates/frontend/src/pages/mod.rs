pub mod about;
pub mod bookshelf;
pub mod city_manager;
pub mod landing;
pub mod map_page;
pub mod project_detail;
pub mod projects;
