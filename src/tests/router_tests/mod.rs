mod api_tests;
mod form_tests;
mod share_tests;
