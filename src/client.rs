//! Client facade exposing every Snap operation.
//!
//! [`Client`] owns the configuration, the parsed signing key, and the transport pair. Each
//! operation runs the same pipeline: serialize and sign through
//! [`RequestBuilder`], dispatch through [`transport::send`], then [`classify`] the response with
//! the endpoint's [`ResponseMode`]. [`SnapServices`] is the object-safe view of the same
//! operations for callers that want `dyn` dispatch or their own test doubles.

// self
use crate::{
	_prelude::*,
	classify::{self, ResponseMode},
	config::{ClientConfig, Environment},
	endpoint::Endpoint,
	error::ConfigError,
	http::{SnapHttpClient, TransportErrorMapper},
	model::*,
	obs::{self, CallOutcome, CallSpan},
	request::RequestBuilder,
	sign::SigningKey,
	transport::{self, CallContext},
};
#[cfg(feature = "reqwest")]
use crate::http::{ReqwestHttpClient, ReqwestTransportErrorMapper};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport stack.
pub type ReqwestSnapClient = Client<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// Boxed future returned by [`SnapServices`] operations.
pub type ServiceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;

/// Object-safe view of every Snap operation.
pub trait SnapServices
where
	Self: Send + Sync,
{
	/// `POST /account/v1.0/account-inquiry-external`.
	fn account_inquiry<'a>(
		&'a self,
		ctx: &'a CallContext,
		request: &'a AccountInquiryRequest,
	) -> ServiceFuture<'a, AccountInquiryResponse>;

	/// `POST /account/v1.0/transfer-interbank`; the body is decoded whatever the HTTP status.
	fn transfer_interbank<'a>(
		&'a self,
		ctx: &'a CallContext,
		request: &'a TransferInterbankRequest,
	) -> ServiceFuture<'a, TransferInterbankResponse>;

	/// `POST /account/v1.0/transfer/status`; the body is decoded whatever the HTTP status.
	fn transfer_status<'a>(
		&'a self,
		ctx: &'a CallContext,
		request: &'a TransferStatusRequest,
	) -> ServiceFuture<'a, TransferStatusResponse>;

	/// `POST /account/v1.0/balance-inquiry`.
	fn balance_inquiry<'a>(
		&'a self,
		ctx: &'a CallContext,
		request: &'a BalanceInquiryRequest,
	) -> ServiceFuture<'a, BalanceInquiryResponse>;

	/// `POST /account/v1.0/transaction-history-list`.
	fn history_list<'a>(
		&'a self,
		ctx: &'a CallContext,
		request: &'a HistoryListRequest,
	) -> ServiceFuture<'a, HistoryListResponse>;

	/// `POST /account/v1.0/emoney/topup`.
	fn emoney_topup<'a>(
		&'a self,
		ctx: &'a CallContext,
		request: &'a EmoneyTopupRequest,
	) -> ServiceFuture<'a, EmoneyTopupResponse>;

	/// `POST /account/v1.0/emoney/topup-status`.
	fn emoney_topup_status<'a>(
		&'a self,
		ctx: &'a CallContext,
		request: &'a EmoneyTopupStatusRequest,
	) -> ServiceFuture<'a, EmoneyTopupStatusResponse>;

	/// `POST /account/v1.0/transfer-va/inquiry`.
	fn va_inquiry<'a>(
		&'a self,
		ctx: &'a CallContext,
		request: &'a VaInquiryRequest,
	) -> ServiceFuture<'a, VaInquiryResponse>;

	/// `POST /account/v1.0/transfer-va/payment`.
	fn va_payment<'a>(
		&'a self,
		ctx: &'a CallContext,
		request: &'a VaPaymentRequest,
	) -> ServiceFuture<'a, VaPaymentResponse>;
}

/// Signs, dispatches, and classifies Snap calls for one partner.
///
/// The signing key is parsed once at construction, so a malformed key fails fast with
/// [`SigningError::KeyParse`](crate::error::SigningError::KeyParse) instead of on the first call.
/// Clones share the transport pair and the key.
#[derive(Clone)]
pub struct Client<C, M>
where
	C: ?Sized + SnapHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// HTTP client wrapper used for every outbound request.
	pub http_client: Arc<C>,
	/// Mapper applied to transport-layer errors before surfacing them to callers.
	pub transport_mapper: Arc<M>,
	config: ClientConfig,
	key: Arc<SigningKey>,
}
impl<C, M> Client<C, M>
where
	C: ?Sized + SnapHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates a client that reuses the caller-provided transport + mapper pair.
	pub fn with_http_client(
		config: ClientConfig,
		http_client: impl Into<Arc<C>>,
		mapper: impl Into<Arc<M>>,
	) -> Result<Self> {
		let key = SigningKey::from_pem(config.private_key.expose())?;

		Ok(Self {
			http_client: http_client.into(),
			transport_mapper: mapper.into(),
			config,
			key: Arc::new(key),
		})
	}

	/// Active configuration.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Active environment.
	pub fn environment(&self) -> Environment {
		self.config.environment
	}

	/// Base URL every endpoint path is appended to.
	pub fn base_url(&self) -> &Url {
		&self.config.base_url
	}

	/// Switches environment and resets the base URL to the environment's fixed value.
	pub fn set_environment(&mut self, environment: Environment) -> Result<(), ConfigError> {
		self.config.set_environment(environment)
	}

	/// Switches environment by name (`sandbox` or `production`, ASCII case-insensitive).
	///
	/// Any other value, including an empty one, fails with [`ConfigError::InvalidEnvironment`]
	/// and leaves the client unchanged.
	pub fn set_environment_str(&mut self, name: &str) -> Result<(), ConfigError> {
		let environment = name.trim().parse()?;

		self.set_environment(environment)
	}

	/// Runs one signed call against `endpoint` and classifies the response with `mode`.
	///
	/// `body` is serialized once; the exact bytes that were signed are the bytes transmitted.
	pub async fn call<Req, Res>(
		&self,
		ctx: &CallContext,
		endpoint: Endpoint,
		body: Option<&Req>,
		mode: ResponseMode,
	) -> Result<Res>
	where
		Req: ?Sized + Serialize + Sync,
		Res: DeserializeOwned,
	{
		let span = CallSpan::new(endpoint, "call");

		obs::record_call_outcome(endpoint, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let envelope = RequestBuilder::new(&self.config, &self.key).build(
					&self.config.base_url,
					endpoint.path(),
					endpoint.method(),
					body,
				)?;

				if self.config.environment == Environment::Sandbox {
					obs::trace_sandbox(endpoint, &self.config.base_url);
				}

				obs::trace_dispatch(endpoint, &envelope.url, &envelope.external_id, &envelope.timestamp);

				let response = transport::send(
					ctx,
					self.http_client.as_ref(),
					self.transport_mapper.as_ref(),
					endpoint,
					self.config.timeout,
					envelope,
				)
				.await?;

				obs::trace_response(endpoint, response.status().as_u16(), response.body().len());

				classify::classify(&response, mode)
			})
			.await;

		obs::record_call_outcome(endpoint, CallOutcome::of(&result));

		result
	}

	async fn invoke<Req, Res>(&self, ctx: &CallContext, endpoint: Endpoint, request: &Req) -> Result<Res>
	where
		Req: Serialize + Sync,
		Res: DeserializeOwned,
	{
		self.call(ctx, endpoint, Some(request), endpoint.response_mode()).await
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a client backed by reqwest, honoring the configured timeout and CA bundle.
	pub fn new(config: ClientConfig) -> Result<Self> {
		let http_client = ReqwestHttpClient::from_config(&config)?;

		Self::with_http_client(config, http_client, ReqwestTransportErrorMapper)
	}
}
impl<C, M> Debug for Client<C, M>
where
	C: ?Sized + SnapHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("partner_id", &self.config.partner_id)
			.field("environment", &self.config.environment)
			.field("base_url", &self.config.base_url.as_str())
			.finish()
	}
}

macro_rules! impl_snap_services {
	($($name:ident => $endpoint:ident($req:ty) -> $res:ty;)+) => {
		impl<C, M> SnapServices for Client<C, M>
		where
			C: ?Sized + SnapHttpClient,
			M: ?Sized + TransportErrorMapper<C::TransportError>,
		{
			$(
				fn $name<'a>(&'a self, ctx: &'a CallContext, request: &'a $req) -> ServiceFuture<'a, $res> {
					Box::pin(self.invoke(ctx, Endpoint::$endpoint, request))
				}
			)+
		}
	};
}

impl_snap_services! {
	account_inquiry => AccountInquiry(AccountInquiryRequest) -> AccountInquiryResponse;
	transfer_interbank => TransferInterbank(TransferInterbankRequest) -> TransferInterbankResponse;
	transfer_status => TransferStatus(TransferStatusRequest) -> TransferStatusResponse;
	balance_inquiry => BalanceInquiry(BalanceInquiryRequest) -> BalanceInquiryResponse;
	history_list => HistoryList(HistoryListRequest) -> HistoryListResponse;
	emoney_topup => EmoneyTopup(EmoneyTopupRequest) -> EmoneyTopupResponse;
	emoney_topup_status => EmoneyTopupStatus(EmoneyTopupStatusRequest) -> EmoneyTopupStatusResponse;
	va_inquiry => VaInquiry(VaInquiryRequest) -> VaInquiryResponse;
	va_payment => VaPayment(VaPaymentRequest) -> VaPaymentResponse;
}
