// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	sync::Arc,
	time::Duration,
};
// crates.io
use tokio_util::sync::CancellationToken;
// self
use faspay_snap::{
	client::{Client, SnapServices},
	config::ClientConfig,
	endpoint::Endpoint,
	error::{ApiError, Error, TransportError},
	http::{
		HttpRequest, HttpResponse, NetworkErrorMapper, SnapHttpClient, TransportErrorMapper,
		TransportFuture, mock::ScriptedHttpClient,
	},
	model::{BalanceInquiryRequest, HistoryListAdditionalInfo, HistoryListRequest},
	sign::{SigningInput, SigningKey},
	transport::CallContext,
};

const PKCS8_KEY: &str = include_str!("fixtures/rsa_pkcs8.pem");

fn config() -> ClientConfig {
	ClientConfig::builder("99999", PKCS8_KEY)
		.external_id("20250607004236908")
		.build()
		.expect("Test configuration should build.")
}

fn scripted(transport: &ScriptedHttpClient) -> Client<ScriptedHttpClient, NetworkErrorMapper> {
	Client::with_http_client(config(), transport.clone(), NetworkErrorMapper)
		.expect("Client should build with the fixture key.")
}

fn balance() -> BalanceInquiryRequest {
	BalanceInquiryRequest { account_no: "9920017573".into(), ..Default::default() }
}

#[derive(Debug)]
struct RefusedError;
impl Display for RefusedError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Connection refused.")
	}
}
impl StdError for RefusedError {}

struct RefusingHttpClient;
impl SnapHttpClient for RefusingHttpClient {
	type TransportError = RefusedError;

	fn execute(&self, _request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		Box::pin(async { Err(RefusedError) })
	}
}

struct EchoHttpClient;
impl SnapHttpClient for EchoHttpClient {
	type TransportError = RefusedError;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		Box::pin(async move {
			let body = format!(
				r#"{{"responseCode":"00","responseMessage":"{}","detailData":[]}}"#,
				request.uri().path()
			);

			Ok(HttpResponse::new(body.into_bytes()))
		})
	}
}

struct ApiFlavoredMapper;
impl TransportErrorMapper<RefusedError> for ApiFlavoredMapper {
	fn map_transport_error(&self, endpoint: Endpoint, _timeout: Duration, error: RefusedError) -> Error {
		ApiError::new(503, "service_unavailable", error.to_string(), Some(endpoint.to_string())).into()
	}
}

#[tokio::test]
async fn double_sees_fully_signed_request() {
	let transport = ScriptedHttpClient::new().respond(200, r#"{"responseCode":"00","accountNo":"9920017573"}"#);
	let client = scripted(&transport);

	client
		.balance_inquiry(&CallContext::default(), &balance())
		.await
		.expect("Scripted balance inquiry should succeed.");

	let recorded = transport.requests();
	let request = &recorded[0];
	let key = SigningKey::from_pem(PKCS8_KEY).expect("Fixture key should parse.");
	let timestamp = request.header("x-timestamp").expect("Timestamp header should be set.");
	let expected = key
		.sign(&SigningInput {
			method: request.method.as_str(),
			path: Endpoint::BalanceInquiry.path(),
			body: request.body_text().expect("Body should be UTF-8."),
			timestamp,
		})
		.expect("Fixture should sign.");

	assert_eq!(recorded.len(), 1);
	assert_eq!(request.uri, "https://api.faspay.co.id/account/v1.0/balance-inquiry");
	assert_eq!(request.header("x-external-id"), Some("20250607004236908"));
	assert_eq!(request.header("x-partner-id"), Some("99999"));
	assert_eq!(request.header("x-signature"), Some(expected.as_str()));
}

#[tokio::test]
async fn custom_transport_and_mapper_are_used() {
	let client: Client<RefusingHttpClient, ApiFlavoredMapper> =
		Client::with_http_client(config(), RefusingHttpClient, ApiFlavoredMapper)
			.expect("Client should build.");
	let err = client
		.balance_inquiry(&CallContext::default(), &balance())
		.await
		.expect_err("Refusing transport must fail.");
	let api = err.as_api_error().expect("Mapper output should surface unchanged.");

	assert!(err.is_server_error());
	assert_eq!(api.code, "service_unavailable");
	assert_eq!(api.details.as_deref(), Some("balance_inquiry"));
}

#[tokio::test]
async fn services_trait_objects_dispatch_to_custom_transport() {
	let client: Arc<dyn SnapServices> = Arc::new(
		Client::with_http_client(config(), EchoHttpClient, NetworkErrorMapper)
			.expect("Client should build."),
	);
	let response = client
		.history_list(&CallContext::default(), &HistoryListRequest {
			from_date_time: "2024-12-01T00:00:00-07:00".into(),
			to_date_time: "2024-12-30T00:00:00-07:00".into(),
			additional_info: Some(HistoryListAdditionalInfo { account_no: "9920017573".into() }),
		})
		.await
		.expect("Echo transport should succeed.");

	assert_eq!(response.response_message, Endpoint::HistoryList.path());
	assert!(response.detail_data.is_empty());
}

#[tokio::test]
async fn injected_transport_error_is_a_network_error() {
	let transport = ScriptedHttpClient::new().fail("HTTP client error");
	let err = scripted(&transport)
		.balance_inquiry(&CallContext::default(), &balance())
		.await
		.expect_err("Injected failure must surface.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
	assert!(!err.is_api_error());
}

#[tokio::test]
async fn cancellation_aborts_in_flight_call_promptly() {
	let transport = ScriptedHttpClient::new().hang();
	let client = scripted(&transport);
	let token = CancellationToken::new();
	let ctx = CallContext::new().with_cancellation(token.clone());
	let canceller = tokio::spawn(async move {
		tokio::time::sleep(Duration::from_millis(50)).await;
		token.cancel();
	});
	let started = tokio::time::Instant::now();
	let err = client
		.balance_inquiry(&ctx, &balance())
		.await
		.expect_err("Cancelled call must fail.");

	canceller.await.expect("Canceller task should finish.");

	assert!(err.is_cancelled());
	assert!(started.elapsed() < Duration::from_secs(5));
	assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn pre_cancelled_context_never_reaches_transport() {
	let transport = ScriptedHttpClient::new();
	let token = CancellationToken::new();

	token.cancel();

	let err = scripted(&transport)
		.balance_inquiry(&CallContext::new().with_cancellation(token), &balance())
		.await
		.expect_err("Cancelled context must fail.");

	assert!(err.is_cancelled());
	assert!(transport.requests().is_empty());
}

#[tokio::test(start_paused = true)]
async fn deadline_bounds_hanging_call() {
	let transport = ScriptedHttpClient::new().hang();
	let err = scripted(&transport)
		.balance_inquiry(&CallContext::new().with_timeout(Duration::from_millis(200)), &balance())
		.await
		.expect_err("Hanging call must time out.");

	assert!(err.is_timeout());
	assert!(matches!(
		err,
		Error::Transport(TransportError::Timeout { after }) if after <= Duration::from_millis(200)
	));
}

#[tokio::test]
async fn exhausted_script_yields_parse_error_for_empty_body() {
	let transport = ScriptedHttpClient::new();
	let err = scripted(&transport)
		.balance_inquiry(&CallContext::default(), &balance())
		.await
		.expect_err("Empty body cannot decode.");

	assert!(matches!(err, Error::Parse(ref parse) if parse.status == 200));
}
