// Tool catalog: the fixed set of Northwind API endpoints exposed as tools

use serde::{Deserialize, Serialize};

/// Name reported by both front ends.
pub const CATALOG_NAME: &str = "northwind";

/// Version reported by both front ends.
pub const CATALOG_VERSION: &str = "1.0.0";

pub const CATALOG_DESCRIPTION: &str =
    "Read-only analytics over the Northwind dataset: customers, orders, products, suppliers and sales summaries.";

/// Advisory parameter type. Never enforced when building requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Integer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    #[serde(rename = "GET")]
    Get,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
        }
    }
}

/// Documentation for one query parameter accepted by an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub description: String,
}

impl ParamDescriptor {
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: ParamType::String,
            description: description.into(),
        }
    }

    pub fn integer(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: ParamType::Integer,
            description: description.into(),
        }
    }
}

/// One invocable tool, mapped 1:1 onto a backend GET endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    /// Path appended verbatim to the backend base URL.
    pub endpoint: String,
    pub method: HttpMethod,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ParamDescriptor>,
}

impl ToolDescriptor {
    pub fn get(
        name: impl Into<String>,
        description: impl Into<String>,
        endpoint: impl Into<String>,
        params: Vec<ParamDescriptor>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            endpoint: endpoint.into(),
            method: HttpMethod::Get,
            params,
        }
    }
}

/// Immutable, ordered set of tool descriptors.
///
/// Built once at startup and shared (usually behind an `Arc`) by every front
/// end. Names are expected to be unique; on a duplicate, `find` returns the
/// first match.
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    tools: Vec<ToolDescriptor>,
}

impl ToolCatalog {
    pub fn new(tools: Vec<ToolDescriptor>) -> Self {
        Self { tools }
    }

    /// List all tools in catalog order
    pub fn list(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Get a tool by name
    pub fn find(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// The Northwind API catalog.
    pub fn northwind() -> Self {
        use crate::catalog::ParamDescriptor as P;

        Self::new(vec![
            ToolDescriptor::get(
                "get_customers",
                "Retrieve all customer records. Filterable by: customer_id, company_name, contact_name, contact_title, address, city, region, postal_code, country, phone, or fax.",
                "/customers",
                vec![
                    P::string("country", "Filter customers by country."),
                    P::string("city", "Filter customers by city."),
                    P::string("customer_id", "Filter by customer ID."),
                    P::string("company_name", "Filter by customer company name."),
                    P::string("contact_name", "Filter by customer contact name."),
                    P::string("contact_title", "Filter by customer contact title."),
                    P::string("address", "Filter by customer address."),
                    P::string("region", "Filter by customer region."),
                    P::string("postal_code", "Filter by customer postal code."),
                    P::string("phone", "Filter by customer phone number."),
                    P::string("fax", "Filter by customer fax number."),
                ],
            ),
            ToolDescriptor::get(
                "get_orders",
                "Retrieve all orders, filterable by: order_id, customer_id, customer_name, employee, employee_name, year, order_date, required_date, shipped_date, ship_via, shipper_name, ship_name, ship_address, ship_city, ship_region, ship_postal_code, or country (ship country).",
                "/orders",
                vec![
                    P::string("customer_id", "Filter orders by customer ID."),
                    P::string("employee", "Filter orders by employee ID."),
                    P::integer("year", "Filter orders by order year."),
                    P::string("country", "Filter orders by ship country."),
                    P::string("order_id", "Filter orders by order ID."),
                    P::string("customer_name", "Filter orders by customer name."),
                    P::string("employee_name", "Filter orders by employee name."),
                    P::string("order_date", "Filter orders by exact order date."),
                    P::string("required_date", "Filter orders by required date."),
                    P::string("shipped_date", "Filter orders by shipped date."),
                    P::string("ship_via", "Filter orders by shipper ID."),
                    P::string("shipper_name", "Filter orders by shipper name."),
                    P::string("ship_name", "Filter orders by ship name."),
                    P::string("ship_address", "Filter orders by ship address."),
                    P::string("ship_city", "Filter orders by ship city."),
                    P::string("ship_region", "Filter orders by ship region."),
                    P::string("ship_postal_code", "Filter orders by ship postal code."),
                ],
            ),
            ToolDescriptor::get(
                "get_order_details",
                "Retrieve product-level order details (price, quantity, discount). Filterable by: order_id, customer_id, product_id, product_name, category_name, or supplier_name.",
                "/orders/details",
                vec![
                    P::integer("order_id", "Filter by the exact order ID."),
                    P::string("customer_id", "Filter by customer ID."),
                    P::string("product_id", "Filter by product ID."),
                    P::string("product_name", "Filter by product name."),
                    P::string("category_name", "Filter by category name."),
                    P::string("supplier_name", "Filter by supplier name."),
                ],
            ),
            ToolDescriptor::get(
                "get_products",
                "Retrieve product details (price, stock, supplier, category). Filterable by: product_id, product_name, supplier_id, supplier_name, category_id, category_name, or discontinued status.",
                "/products",
                vec![
                    P::string("product_id", "Filter by product ID."),
                    P::string("product_name", "Filter by product name."),
                    P::string("supplier_id", "Filter by supplier ID."),
                    P::string("supplier_name", "Filter by supplier name."),
                    P::string("category_id", "Filter by category ID."),
                    P::string("category_name", "Filter by category name."),
                    P::string("discontinued", "Filter by discontinued status ('true' or 'false')."),
                ],
            ),
            ToolDescriptor::get(
                "get_suppliers",
                "Retrieve all supplier information. Filterable by: supplier_id, company_name, contact_name, contact_title, city, country, phone, or fax.",
                "/suppliers",
                vec![
                    P::string("country", "Filter by supplier country."),
                    P::string("supplier_id", "Filter by supplier ID."),
                    P::string("company_name", "Filter by company name."),
                    P::string("contact_name", "Filter by contact name."),
                    P::string("contact_title", "Filter by contact title."),
                    P::string("city", "Filter by city."),
                    P::string("phone", "Filter by phone number."),
                    P::string("fax", "Filter by fax number."),
                ],
            ),
            ToolDescriptor::get(
                "get_sales_by_country",
                "Aggregate total sales grouped by customer country. Filterable by: year or country.",
                "/summary/sales-by-country",
                vec![
                    P::integer("year", "Filter by order year."),
                    P::string("country", "Filter by a specific country."),
                ],
            ),
            ToolDescriptor::get(
                "get_sales_by_category",
                "Total revenue aggregated by product category. Filterable by: year or category_name.",
                "/summary/sales-by-category",
                vec![
                    P::integer("year", "Filter by order year."),
                    P::string("category_name", "Filter by category name."),
                ],
            ),
            ToolDescriptor::get(
                "get_sales_by_employee",
                "Total sales and order counts grouped by employee. Filterable by: year or employee_name.",
                "/summary/sales-by-employee",
                vec![
                    P::integer("year", "Filter by order year."),
                    P::string("employee_name", "Filter by employee name."),
                ],
            ),
            ToolDescriptor::get(
                "get_sales_by_year",
                "Annual sales totals across all countries and categories. Not filterable.",
                "/summary/sales-by-year",
                vec![],
            ),
            ToolDescriptor::get(
                "get_sales_by_shipper",
                "Total sales grouped by freight company. Filterable by: year or company_name (shipper name).",
                "/summary/sales-by-shipper",
                vec![
                    P::integer("year", "Filter by order year."),
                    P::string("company_name", "Filter by shipper company name."),
                ],
            ),
            ToolDescriptor::get(
                "get_top_customers",
                "Retrieve top customers ranked by total revenue. Filterable by: year, country, customer_id, or company_name.",
                "/analytics/top-customers",
                vec![
                    P::integer("year", "Filter results by order year."),
                    P::string("country", "Filter by customer country."),
                    P::string("customer_id", "Filter by customer ID."),
                    P::string("company_name", "Filter by customer company name."),
                ],
            ),
            ToolDescriptor::get(
                "get_customer_orders",
                "Detailed order history per customer. Filterable by: customer_id, year, order_id, company_name, order_date, shipped_date, or country.",
                "/analytics/customer-orders",
                vec![
                    P::string("customer_id", "Filter by customer ID."),
                    P::integer("year", "Filter by order year."),
                    P::string("order_id", "Filter by order ID."),
                    P::string("company_name", "Filter by customer company name."),
                    P::string("order_date", "Filter by order date."),
                    P::string("shipped_date", "Filter by shipped date."),
                    P::string("country", "Filter by ship country."),
                ],
            ),
            ToolDescriptor::get(
                "get_customer_ltv",
                "Total lifetime revenue (LTV) per customer. Filterable by: country, customer_id, or company_name.",
                "/analytics/customer-ltv",
                vec![
                    P::string("country", "Filter by customer country."),
                    P::string("customer_id", "Filter by customer ID."),
                    P::string("company_name", "Filter by customer company name."),
                ],
            ),
            ToolDescriptor::get(
                "get_customer_retention",
                "Measures repeat customers and retention rates. Filterable by: year, customer_id, company_name, country, or repeat_customer status ('true'/'false').",
                "/analytics/customer-retention",
                vec![
                    P::integer("year", "Filter by year."),
                    P::string("customer_id", "Filter by customer ID."),
                    P::string("company_name", "Filter by customer company name."),
                    P::string("country", "Filter by country."),
                    P::string("repeat_customer", "Filter by repeat customer status ('true' or 'false')."),
                ],
            ),
            ToolDescriptor::get(
                "get_top_products",
                "Top-selling products by total revenue and units sold. Filterable by: year, product_id, product_name, category_name, or supplier_name.",
                "/analytics/top-products",
                vec![
                    P::integer("year", "Filter results by order year."),
                    P::string("product_id", "Filter by product ID."),
                    P::string("product_name", "Filter by product name."),
                    P::string("category_name", "Filter by product category name."),
                    P::string("supplier_name", "Filter by supplier name."),
                ],
            ),
            ToolDescriptor::get(
                "get_supplier_performance",
                "Supplier contribution by revenue and efficiency. Filterable by: year, supplier_id, supplier_name, country, or top_category.",
                "/analytics/supplier-performance",
                vec![
                    P::integer("year", "Filter by order year."),
                    P::string("supplier_id", "Filter by supplier ID."),
                    P::string("supplier_name", "Filter by supplier name."),
                    P::string("country", "Filter by supplier country."),
                    P::string("top_category", "Filter by top category."),
                ],
            ),
            ToolDescriptor::get(
                "get_inventory_status",
                "Product stock levels, reorder needs, and discontinued items. Filterable by: product_id, product_name, supplier_name, category_name, discontinued status, or needs_reorder status.",
                "/analytics/inventory-status",
                vec![
                    P::string("product_id", "Filter by product ID."),
                    P::string("product_name", "Filter by product name."),
                    P::string("supplier_name", "Filter by supplier name."),
                    P::string("category_name", "Filter by category name."),
                    P::string("discontinued", "Filter by discontinued status ('true' or 'false')."),
                    P::string("needs_reorder", "Filter by reorder status ('true' or 'false')."),
                ],
            ),
            ToolDescriptor::get(
                "get_employee_performance",
                "Rank employees by sales totals and order count. Filterable by: year, employee_id, full_name, title, or country.",
                "/analytics/employee-performance",
                vec![
                    P::integer("year", "Filter by order year."),
                    P::string("employee_id", "Filter by employee ID."),
                    P::string("full_name", "Filter by employee full name."),
                    P::string("title", "Filter by employee job title."),
                    P::string("country", "Filter by employee country."),
                ],
            ),
            ToolDescriptor::get(
                "get_shipping_costs",
                "Freight cost and order volume per shipping company. Filterable by: year, shipper_id, or company_name.",
                "/analytics/shipping-costs",
                vec![
                    P::integer("year", "Filter by order year."),
                    P::string("shipper_id", "Filter by shipper ID."),
                    P::string("company_name", "Filter by shipper company name."),
                ],
            ),
        ])
    }
}
