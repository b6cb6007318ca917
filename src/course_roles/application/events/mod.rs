pub mod course_access_role_event_dispatcher;
