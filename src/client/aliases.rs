use super::{ForwardEmailClient, ForwardEmailError, HttpMethod, parse_body};
use crate::domain::{
    Alias, AliasName, AliasParameters, DomainName, GeneratePasswordParameters, GeneratedPassword,
};

impl ForwardEmailClient {
    /// List every alias under `domain`, in the order the server returns them.
    pub async fn get_aliases(&self, domain: &DomainName) -> Result<Vec<Alias>, ForwardEmailError> {
        let request = self.new_request(
            HttpMethod::Get,
            &["v1", "domains", domain.as_str(), "aliases"],
        )?;
        let body = self.do_request(request).await?;
        parse_body(body, crate::transport::decode_aliases_json_response)
    }

    /// Fetch one alias by name.
    pub async fn get_alias(
        &self,
        domain: &DomainName,
        alias: &AliasName,
    ) -> Result<Alias, ForwardEmailError> {
        let request = self.new_request(HttpMethod::Get, &alias_path(domain, alias))?;
        let body = self.do_request(request).await?;
        parse_body(body, crate::transport::decode_alias_json_response)
    }

    /// Create `alias` under `domain`.
    ///
    /// Only the fields set in `parameters` are sent; see [`AliasParameters`].
    pub async fn create_alias(
        &self,
        domain: &DomainName,
        alias: &AliasName,
        parameters: &AliasParameters,
    ) -> Result<Alias, ForwardEmailError> {
        let request = self
            .new_request(
                HttpMethod::Post,
                &["v1", "domains", domain.as_str(), "aliases"],
            )?
            .with_form(crate::transport::encode_alias_form(alias, parameters));
        let body = self.do_request(request).await?;
        parse_body(body, crate::transport::decode_alias_json_response)
    }

    /// Update an existing alias. The form always repeats the alias `name`.
    pub async fn update_alias(
        &self,
        domain: &DomainName,
        alias: &AliasName,
        parameters: &AliasParameters,
    ) -> Result<Alias, ForwardEmailError> {
        let request = self
            .new_request(HttpMethod::Put, &alias_path(domain, alias))?
            .with_form(crate::transport::encode_alias_form(alias, parameters));
        let body = self.do_request(request).await?;
        parse_body(body, crate::transport::decode_alias_json_response)
    }

    /// Delete an alias. Any 2xx response counts as success; its body is ignored.
    pub async fn delete_alias(
        &self,
        domain: &DomainName,
        alias: &AliasName,
    ) -> Result<(), ForwardEmailError> {
        let request = self.new_request(HttpMethod::Delete, &alias_path(domain, alias))?;
        self.do_request(request).await?;
        Ok(())
    }

    /// Generate (or set) the IMAP/SMTP password of an alias.
    ///
    /// Field combinations are not checked here. Sending both `new_password`
    /// and `password`, or none of the fields, is left for the server to judge.
    pub async fn generate_alias_password(
        &self,
        domain: &DomainName,
        alias: &AliasName,
        parameters: &GeneratePasswordParameters,
    ) -> Result<GeneratedPassword, ForwardEmailError> {
        let mut segments = alias_path(domain, alias).to_vec();
        segments.push("generate-password");
        let request = self
            .new_request(HttpMethod::Post, &segments)?
            .with_form(crate::transport::encode_generate_password_form(parameters));
        let body = self.do_request(request).await?;
        parse_body(
            body,
            crate::transport::decode_generated_password_json_response,
        )
    }
}

fn alias_path<'a>(domain: &'a DomainName, alias: &'a AliasName) -> [&'a str; 5] {
    ["v1", "domains", domain.as_str(), "aliases", alias.as_str()]
}
