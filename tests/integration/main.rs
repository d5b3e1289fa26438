mod api_test;
mod created_test;
mod helpers;
mod updated_test;
