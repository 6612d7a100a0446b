use smilebook::api::{ApiClient, ApiError, HttpApiClient};
use smilebook::data::{
    AppointmentsResponse, CalendarEntry, CreateAppointmentRequest, DentistsResponse, LoginRequest,
    LoginResponse, MessageResponse, RegisterRequest, UpdateAppointmentRequest,
};

/// The main API client for the Smilebook application, wrapping the remote
/// appointments API endpoints the frontend consumes. Generic over the
/// transport so tests can substitute a canned client.
pub struct Api<C = HttpApiClient> {
    client: C,
}

impl Api {
    pub fn new(base_url: &str) -> Self {
        Api::with_client(HttpApiClient::new(base_url))
    }
}

impl<C: ApiClient> Api<C> {
    pub fn with_client(client: C) -> Self {
        Api { client }
    }

    #[cfg(test)]
    pub(crate) fn client(&self) -> &C {
        &self.client
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.post("/login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        self.client.post("/register/user", request).await
    }

    pub async fn available_dentists(&self) -> Result<DentistsResponse, ApiError> {
        self.client.get("/available-dentists").await
    }

    pub async fn create_appointment(
        &self,
        request: &CreateAppointmentRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.post("/appointments/create", request).await
    }

    pub async fn user_appointments(&self, email: &str) -> Result<AppointmentsResponse, ApiError> {
        let endpoint = format!("/user-appointments?userName={}", urlencoding::encode(email));
        self.client.get(&endpoint).await
    }

    pub async fn update_appointment(
        &self,
        request: &UpdateAppointmentRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.post("/appointments/update", request).await
    }

    /// The calendar read-model.
    pub async fn appointments(&self) -> Result<Vec<CalendarEntry>, ApiError> {
        self.client.get("/appointments").await
    }
}

/// Create a new instance of the API client with the configured base URL.
pub fn create() -> Api {
    Api::new(option_env!("SMILEBOOK_API_URL").unwrap_or("http://localhost:3030"))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use smilebook::api::{ApiClient, ApiError};

    /// Canned in-memory client: maps endpoint prefixes to JSON bodies or
    /// rejections, recording every request it serves.
    #[derive(Default)]
    pub struct StubClient {
        responses: Vec<(String, Result<serde_json::Value, (u16, String)>)>,
        calls: RefCell<Vec<String>>,
    }

    impl StubClient {
        pub fn respond(mut self, prefix: &str, body: serde_json::Value) -> Self {
            self.responses.push((prefix.to_string(), Ok(body)));
            self
        }

        pub fn reject(mut self, prefix: &str, status: u16, message: &str) -> Self {
            self.responses
                .push((prefix.to_string(), Err((status, message.to_string()))));
            self
        }

        pub fn calls_to(&self, prefix: &str) -> usize {
            self.calls
                .borrow()
                .iter()
                .filter(|endpoint| endpoint.starts_with(prefix))
                .count()
        }

        fn serve<T>(&self, endpoint: &str) -> Result<T, ApiError>
        where
            T: serde::de::DeserializeOwned,
        {
            self.calls.borrow_mut().push(endpoint.to_string());
            let (_, outcome) = self
                .responses
                .iter()
                .find(|(prefix, _)| endpoint.starts_with(prefix.as_str()))
                .unwrap_or_else(|| panic!("no stubbed response for {endpoint}"));
            match outcome {
                Ok(body) => {
                    Ok(serde_json::from_value(body.clone()).expect("stub body deserializes"))
                }
                Err((status, message)) => Err(ApiError::Rejected {
                    status: *status,
                    message: message.clone(),
                }),
            }
        }
    }

    #[async_trait::async_trait(?Send)]
    impl ApiClient for StubClient {
        async fn get<T>(&self, endpoint: &str) -> Result<T, ApiError>
        where
            T: serde::de::DeserializeOwned,
        {
            self.serve(endpoint)
        }

        async fn post<T, B>(&self, endpoint: &str, _body: &B) -> Result<T, ApiError>
        where
            T: serde::de::DeserializeOwned,
            B: serde::Serialize,
        {
            self.serve(endpoint)
        }
    }
}
