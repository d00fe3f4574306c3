use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};

use crate::server::{
    data::customer::CustomerRepository,
    error::{auth::AuthError, AppError},
    model::{
        customer::OauthCustomerParams,
        oauth::{FacebookUserInfo, GoogleUserInfo},
    },
    service::oauth::{OauthProvider, OauthService},
    util::uid::short_uid,
};

impl<'a> OauthService<'a> {
    /// Completes the OAuth flow: exchanges the authorization code, fetches
    /// the provider profile, and finds or creates the matching customer.
    ///
    /// # Returns
    /// - `Ok(Model)` - The logged-in customer, with last login stamped
    /// - `Err(AppError::AuthErr(TokenExchangeFailed))` - The code exchange
    ///   was rejected by the provider
    /// - `Err(AppError::BadRequest)` - The provider returned no email
    pub async fn callback(
        &self,
        authorization_code: String,
    ) -> Result<entity::customer::Model, AppError> {
        let customer_repo = CustomerRepository::new(self.db);

        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|err| AuthError::TokenExchangeFailed(err.to_string()))?;

        let params = self.fetch_profile(&token).await?;

        let customer = customer_repo.upsert_oauth(params).await?;
        customer_repo.record_login(customer.id).await?;

        Ok(customer)
    }

    /// Retrieves the provider profile with the access token and normalizes it
    /// into customer parameters.
    async fn fetch_profile(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<OauthCustomerParams, AppError> {
        let access_token = token.access_token().secret();

        let response = self
            .http_client
            .get(self.provider.userinfo_url())
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?;

        let params = match self.provider {
            OauthProvider::Google => {
                let profile = response.json::<GoogleUserInfo>().await?;

                OauthCustomerParams {
                    uid: short_uid(),
                    email: profile.email,
                    first_name: profile.given_name,
                    last_name: profile.family_name,
                    provider: self.provider.name().to_string(),
                }
            }
            OauthProvider::Facebook => {
                let profile = response.json::<FacebookUserInfo>().await?;

                let email = profile.email.ok_or_else(|| {
                    AppError::BadRequest(
                        "Facebook account has no email address to link".to_string(),
                    )
                })?;

                OauthCustomerParams {
                    uid: short_uid(),
                    email,
                    first_name: profile.first_name,
                    last_name: profile.last_name,
                    provider: self.provider.name().to_string(),
                }
            }
        };

        Ok(params)
    }
}
