use paste::paste;

/// `resp_xxx!()` or `resp_xxx!(body)` for a plain-text response.
macro_rules! plain_resp {
    ($name:ident, $status:ident) => {
        paste! {
            #[macro_export]
            macro_rules! [<$name _macro>] {
                () => {
                    actix_web::HttpResponse::$status().finish()
                };
                ($message:expr) => {
                    actix_web::HttpResponse::$status().body($message)
                };
            }
            #[allow(unused_imports)]
            pub use [<$name _macro>] as $name;
        }
    };
}

/// `resp_xxx_json!(value)` serializes `value` as the response body.
macro_rules! json_resp {
    ($name:ident, $status:ident) => {
        paste! {
            #[macro_export]
            macro_rules! [<$name _macro>] {
                ($value:expr) => {
                    actix_web::HttpResponse::$status().json($value)
                };
            }
            #[allow(unused_imports)]
            pub use [<$name _macro>] as $name;
        }
    };
}

json_resp!(resp_200_Ok_json, Ok);
plain_resp!(resp_400_BadRequest, BadRequest);

/// Unwraps a roster result, or returns the error response matching the failure.
#[macro_export]
macro_rules! yeet_roster_error_macro {
    ($result:expr) => {
        match $result {
            Ok(data) => data,
            Err(e) => return $crate::responses::response_from_roster_error(&e),
        }
    };
}
#[allow(unused_imports)]
pub use yeet_roster_error_macro as yeet_roster_error;
