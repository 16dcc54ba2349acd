pub mod city_detail;
pub mod city_form;
pub mod interactive_map;
pub mod nav_bar;
pub mod steam_games;
