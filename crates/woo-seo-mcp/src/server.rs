// Rust guideline compliant 2026-02-14

use rmcp::{
    handler::server::{
        router::{prompt::PromptRouter, tool::ToolRouter},
        wrapper::Parameters,
    },
    model::*,
    prompt, prompt_handler, prompt_router,
    service::RequestContext,
    tool_handler, ErrorData as McpError, RoleServer, ServerHandler,
};
use tracing::{info, warn};
use woo_seo::WooClient;

use crate::args::{
    AnalyzeProductsInput, AnalyzeStoreArgs, BulkGenerateSeoArgs, BulkUpdateInput,
    GetProductsInput, ProductIdInput, UpdateProductInput,
};
use crate::handlers;

pub const STATS_URI: &str = "woo://store/stats";

/// MCP server exposing product content and SEO tools for one WooCommerce store.
#[derive(Clone)]
pub struct WooSeoServer {
    client: WooClient,
    pub tool_router: ToolRouter<Self>,
    pub prompt_router: PromptRouter<Self>,
}

#[rmcp::tool_router]
impl WooSeoServer {
    /// Construct a server bound to `client`.
    pub fn new(client: WooClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    #[rmcp::tool(
        description = "List products with optional status and category filters, flagging missing descriptions"
    )]
    async fn get_products(&self, Parameters(input): Parameters<GetProductsInput>) -> String {
        match handlers::get_products(&self.client, input).await {
            Ok(output) => output,
            Err(err) => format!("Error fetching products: {err}"),
        }
    }

    #[rmcp::tool(description = "Show full details of one product including SEO metadata")]
    async fn get_product_by_id(&self, Parameters(input): Parameters<ProductIdInput>) -> String {
        match handlers::get_product_by_id(&self.client, input.product_id).await {
            Ok(output) => output,
            Err(err) => format!("Error fetching product: {err}"),
        }
    }

    #[rmcp::tool(
        description = "Update a product's description, short description, SEO title or SEO description"
    )]
    async fn update_product(&self, Parameters(input): Parameters<UpdateProductInput>) -> String {
        match handlers::update_product(&self.client, input).await {
            Ok(output) => output,
            Err(err) => format!("Error updating product: {err}"),
        }
    }

    #[rmcp::tool(
        description = "Analyze products for missing descriptions, short descriptions and SEO data"
    )]
    async fn analyze_products(
        &self,
        Parameters(input): Parameters<AnalyzeProductsInput>,
    ) -> String {
        match handlers::analyze_products(&self.client, input).await {
            Ok(output) => output,
            Err(err) => format!("Error analyzing products: {err}"),
        }
    }

    /// Per-item failures are reported inside the summary.
    #[rmcp::tool(description = "Update multiple products at once")]
    async fn bulk_update_products(&self, Parameters(input): Parameters<BulkUpdateInput>) -> String {
        handlers::bulk_update_products(&self.client, input).await
    }

    #[rmcp::tool(description = "Audit product images for SEO issues and accessibility")]
    async fn audit_product_images(&self, Parameters(input): Parameters<ProductIdInput>) -> String {
        match handlers::audit_product_images(&self.client, input.product_id).await {
            Ok(output) => output,
            Err(err) => format!("Error auditing product images: {err}"),
        }
    }
}

#[prompt_router]
impl WooSeoServer {
    #[prompt(
        name = "analyze_store",
        description = "Store optimization consultant prompt built from a content audit"
    )]
    async fn analyze_store(
        &self,
        Parameters(args): Parameters<AnalyzeStoreArgs>,
    ) -> Result<GetPromptResult, McpError> {
        let text = match handlers::analyze_store_prompt(&self.client, args).await {
            Ok(text) => text,
            Err(err) => format!("Error generating store analysis prompt: {err}"),
        };
        Ok(user_prompt("Analyze the store's content and SEO health", text))
    }

    #[prompt(
        name = "bulk_generate_seo",
        description = "SEO copywriting prompt for products missing SEO titles or descriptions"
    )]
    async fn bulk_generate_seo(
        &self,
        Parameters(args): Parameters<BulkGenerateSeoArgs>,
    ) -> Result<GetPromptResult, McpError> {
        let text = match handlers::bulk_generate_seo_prompt(&self.client, args).await {
            Ok(text) => text,
            Err(err) => format!("Error generating SEO prompt: {err}"),
        };
        Ok(user_prompt("Generate missing SEO metadata", text))
    }
}

fn user_prompt(description: &str, text: String) -> GetPromptResult {
    GetPromptResult {
        description: Some(description.to_string()),
        messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
    }
}

#[tool_handler]
#[prompt_handler]
impl ServerHandler for WooSeoServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "WooCommerce SEO server: list, audit and update product content and SEO metadata. Read woo://store/stats for a store-wide overview.".into(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        let mut stats = RawResource::new(STATS_URI, "Store statistics");
        stats.description = Some("Product counts, content gaps and optimization score".into());
        stats.mime_type = Some("text/plain".into());
        Ok(ListResourcesResult::with_all_items(vec![stats.no_annotation()]))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.resource(&request.uri).await
    }
}

impl WooSeoServer {
    async fn resource(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        if uri != STATS_URI {
            warn!(uri, "unknown resource requested");
            return Err(McpError::resource_not_found(
                "resource_not_found",
                Some(serde_json::json!({ "uri": uri })),
            ));
        }

        info!(uri = STATS_URI, "reading store statistics");
        let text = match handlers::store_stats(&self.client).await {
            Ok(text) => text,
            Err(err) => format!("Error fetching store statistics: {err}"),
        };
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, STATS_URI)],
        })
    }
}
