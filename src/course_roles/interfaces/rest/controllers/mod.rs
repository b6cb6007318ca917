pub mod course_roles_rest_controller;
