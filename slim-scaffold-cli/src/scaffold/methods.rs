//! Method descriptor tables
//!
//! Each generated file is driven by an ordered table of method descriptors.
//! The order of a table is the order in which methods are emitted, so tables
//! are ordered lists and never hash maps.

use super::names::EntityName;
use serde::Serialize;

/// Indentation of method bodies inside a PHP class
const BODY_INDENT: &str = "        ";

/// A single method parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    /// Parameter name without the leading `$`
    pub name: String,
    /// PHP type of the parameter
    pub param_type: String,
    /// Description used in the docblock
    pub description: String,
}

impl Param {
    /// Create a parameter
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        param_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
            description: description.into(),
        }
    }
}

/// HTTP verb of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

/// Route metadata attached to descriptors of the routes file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// HTTP verb
    pub http_method: HttpMethod,
    /// Suffix appended to the entity group path (`""` or `"/{id}"`)
    pub endpoint: String,
    /// Controller method the route dispatches to
    pub controller_method: String,
}

/// Describes one generated method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodDescriptor {
    /// Method identifier, unique within its table
    pub name: String,
    /// One-line summary for the docblock
    pub description: String,
    /// Parameters in declaration order
    pub params: Vec<Param>,
    /// PHP return type
    pub return_type: String,
    /// Description of the return value
    pub return_description: String,
    /// Method body, present for controllers and repositories
    pub body: Option<String>,
    /// Route metadata, present for route files
    pub route: Option<Route>,
}

impl MethodDescriptor {
    /// Create a descriptor without parameters, body or route
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params: Vec::new(),
            return_type: String::new(),
            return_description: String::new(),
            body: None,
            route: None,
        }
    }

    /// Append a parameter
    #[must_use]
    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Set the return type and its description
    #[must_use]
    pub fn returns(
        mut self,
        return_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.return_type = return_type.into();
        self.return_description = description.into();
        self
    }

    /// Set the body from unindented lines
    ///
    /// Non-empty lines are indented to sit inside a class method.
    #[must_use]
    pub fn body<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let body = lines
            .into_iter()
            .map(|line| {
                let line = line.as_ref();
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{BODY_INDENT}{line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        self.body = Some(body);
        self
    }

    /// Attach route metadata
    #[must_use]
    pub fn route(
        mut self,
        http_method: HttpMethod,
        endpoint: impl Into<String>,
        controller_method: impl Into<String>,
    ) -> Self {
        self.route = Some(Route {
            http_method,
            endpoint: endpoint.into(),
            controller_method: controller_method.into(),
        });
        self
    }
}

/// Ordered table of method descriptors keyed by method name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MethodTable {
    entries: Vec<MethodDescriptor>,
}

impl MethodTable {
    /// Create an empty table
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a descriptor
    ///
    /// A descriptor whose name is already present replaces the existing one
    /// in place, so the table keeps its original order and unique keys.
    pub fn insert(&mut self, descriptor: MethodDescriptor) {
        match self.entries.iter_mut().find(|d| d.name == descriptor.name) {
            Some(existing) => *existing = descriptor,
            None => self.entries.push(descriptor),
        }
    }

    /// Look up a descriptor by method name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MethodDescriptor> {
        self.entries.iter().find(|d| d.name == name)
    }

    /// Method names in emission order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|d| d.name.as_str())
    }

    /// Descriptors in emission order
    pub fn iter(&self) -> std::slice::Iter<'_, MethodDescriptor> {
        self.entries.iter()
    }

    /// Number of descriptors
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<MethodDescriptor> for MethodTable {
    fn from_iter<T: IntoIterator<Item = MethodDescriptor>>(iter: T) -> Self {
        let mut table = Self::new();
        for descriptor in iter {
            table.insert(descriptor);
        }
        table
    }
}

impl<'a> IntoIterator for &'a MethodTable {
    type Item = &'a MethodDescriptor;
    type IntoIter = std::slice::Iter<'a, MethodDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn request_params(with_args: bool) -> Vec<Param> {
    let mut params = vec![
        Param::new("request", "Request", "The HTTP request object."),
        Param::new("response", "Response", "The HTTP response object."),
    ];
    if with_args {
        params.push(Param::new("args", "array", "The route parameters."));
    }
    params
}

fn with_params(mut descriptor: MethodDescriptor, params: Vec<Param>) -> MethodDescriptor {
    descriptor.params = params;
    descriptor
}

/// Methods of the model class
#[must_use]
pub fn model_methods(name: &EntityName) -> MethodTable {
    let EntityName {
        lowercase: low,
        capitalized: cap,
        lowercase_plural: low_pl,
        capitalized_plural: cap_pl,
    } = name;

    [
        MethodDescriptor::new(format!("get{cap_pl}"), format!("Retrieve all {low_pl}."))
            .returns("array", format!("Array of {low_pl}.")),
        MethodDescriptor::new(
            format!("get{cap}ById"),
            format!("Retrieve a specific {low} by its ID."),
        )
        .param(Param::new("id", "int", format!("ID of the {low}")))
        .returns("array|null", format!("Data of the {low} or null if not found.")),
        MethodDescriptor::new(format!("add{cap}"), format!("Create a new {low}."))
            .param(Param::new("data", "array", format!("Data for the new {low}")))
            .returns("int|false", "ID of the new record or false in case of error."),
        MethodDescriptor::new(
            format!("update{cap}"),
            format!("Modify an existing {low} by its ID."),
        )
        .param(Param::new("id", "int", format!("The ID of the {low} to update")))
        .param(Param::new("data", "array", format!("New data of the {low}")))
        .returns("bool", "True on success, false on failure."),
        MethodDescriptor::new(
            format!("delete{cap}"),
            format!("Remove a specific {low} by its ID."),
        )
        .param(Param::new("id", "int", format!("The ID of the {low} to delete")))
        .returns("bool", "True on success, false on failure."),
    ]
    .into_iter()
    .collect()
}

/// Methods of the controller class
#[must_use]
pub fn controller_methods(name: &EntityName) -> MethodTable {
    let EntityName {
        lowercase: low,
        capitalized: cap,
        lowercase_plural: low_pl,
        capitalized_plural: cap_pl,
    } = name;
    let repo = format!("$this->{low}Repository");

    [
        with_params(
            MethodDescriptor::new(format!("getAll{cap_pl}"), format!("Retrieve all {low_pl}.")),
            request_params(false),
        )
        .returns("Response", "The HTTP response.")
        .body([
            format!("${low_pl} = {repo}->getAll();"),
            format!("return $response->withJson(${low_pl});"),
        ]),
        with_params(
            MethodDescriptor::new(
                format!("get{cap}ById"),
                format!("Retrieve a specific {low} by its ID."),
            ),
            request_params(true),
        )
        .returns("Response", "The HTTP response.")
        .body([
            format!("${low}Id = (int)$args['id'];"),
            format!("${low} = {repo}->getById(${low}Id);"),
            String::new(),
            format!("if (${low}) {{"),
            format!("    return $response->withJson(${low});"),
            "}".to_string(),
            String::new(),
            format!(
                "return $response->withStatus(404)->withJson(['error' => '{cap} not found']);"
            ),
        ]),
        with_params(
            MethodDescriptor::new(format!("create{cap}"), format!("Create a new {low}.")),
            request_params(false),
        )
        .returns("Response", "The HTTP response.")
        .body([
            "$data = $request->getParsedBody();".to_string(),
            format!("$result = {repo}->create($data);"),
            String::new(),
            "if ($result !== false) {".to_string(),
            "    return $response->withJson(['id' => $result]);".to_string(),
            "}".to_string(),
            String::new(),
            format!(
                "return $response->withStatus(500)->withJson(['error' => 'Failed to create {low}']);"
            ),
        ]),
        with_params(
            MethodDescriptor::new(
                format!("update{cap}"),
                format!("Modify an existing {low} by its ID."),
            ),
            request_params(true),
        )
        .returns("Response", "The HTTP response.")
        .body([
            format!("${low}Id = (int)$args['id'];"),
            "$data = $request->getParsedBody();".to_string(),
            format!("$result = {repo}->update(${low}Id, $data);"),
            String::new(),
            "if ($result) {".to_string(),
            "    return $response->withJson(['success' => true]);".to_string(),
            "}".to_string(),
            String::new(),
            format!(
                "return $response->withStatus(500)->withJson(['error' => 'Failed to update {low}']);"
            ),
        ]),
        with_params(
            MethodDescriptor::new(
                format!("delete{cap}"),
                format!("Delete a specific {low} by its ID."),
            ),
            request_params(true),
        )
        .returns("Response", "The HTTP response.")
        .body([
            format!("${low}Id = (int)$args['id'];"),
            format!("$result = {repo}->delete(${low}Id);"),
            String::new(),
            "if ($result) {".to_string(),
            "    return $response->withJson(['success' => true]);".to_string(),
            "}".to_string(),
            String::new(),
            format!(
                "return $response->withStatus(500)->withJson(['error' => 'Failed to delete {low}']);"
            ),
        ]),
    ]
    .into_iter()
    .collect()
}

/// Methods of the database-backed repository class
///
/// Bodies delegate to the model methods built by [`model_methods`].
#[must_use]
pub fn repository_methods(name: &EntityName) -> MethodTable {
    let EntityName {
        lowercase: low,
        capitalized: cap,
        lowercase_plural: low_pl,
        capitalized_plural: cap_pl,
    } = name;
    let model = format!("$this->{low}Model");

    [
        MethodDescriptor::new("getAll", format!("Retrieve all {low_pl}."))
            .returns("array|null", format!("Array of {low_pl} or null."))
            .body([format!("return {model}->get{cap_pl}();")]),
        MethodDescriptor::new("getById", format!("Retrieve a specific {low} by its ID."))
            .param(Param::new("id", "int", format!("ID of the {low}")))
            .returns("array|null", format!("Data of the {low} or null if not found."))
            .body([format!("return {model}->get{cap}ById($id);")]),
        MethodDescriptor::new("create", format!("Create a new {low}."))
            .param(Param::new("data", "array", format!("Data for the new {low}")))
            .returns("int|false", "ID of the new record or false in case of error.")
            .body([format!("return {model}->add{cap}($data);")]),
        MethodDescriptor::new("update", format!("Modify an existing {low} by its ID."))
            .param(Param::new("id", "int", format!("The ID of the {low} to update")))
            .param(Param::new("data", "array", format!("New data of the {low}")))
            .returns("bool", "True on success, false on failure.")
            .body([format!("return {model}->update{cap}($id, $data);")]),
        MethodDescriptor::new("delete", format!("Delete a specific {low} by its ID."))
            .param(Param::new("id", "int", format!("The ID of the {low} to delete")))
            .returns("bool", "True on success, false on failure.")
            .body([format!("return {model}->delete{cap}($id);")]),
    ]
    .into_iter()
    .collect()
}

/// Methods declared by the repository interface
#[must_use]
pub fn repository_interface_methods(name: &EntityName) -> MethodTable {
    let EntityName {
        lowercase: low,
        lowercase_plural: low_pl,
        ..
    } = name;

    [
        MethodDescriptor::new("getAll", format!("Gets all {low_pl}."))
            .returns("array|null", format!("Array of {low_pl} or null.")),
        MethodDescriptor::new("getById", format!("Retrieve a specific {low} by its ID."))
            .param(Param::new("id", "int", format!("ID of the {low}")))
            .returns("array|null", format!("Data of the {low} or null if not found.")),
        MethodDescriptor::new("create", format!("Creates a new {low}."))
            .param(Param::new("data", "array", format!("Data of the new {low}")))
            .returns("int|false", "ID of the new record or false in case of error."),
        MethodDescriptor::new("update", format!("Updates an existing {low} by its ID."))
            .param(Param::new("id", "int", format!("ID of the {low} to update")))
            .param(Param::new("data", "array", format!("New data of the {low}")))
            .returns("bool", "True on success, false on failure."),
        MethodDescriptor::new("delete", format!("Deletes a specific {low} by its ID."))
            .param(Param::new("id", "int", format!("ID of the {low} to delete")))
            .returns("bool", "True on success, false on failure."),
    ]
    .into_iter()
    .collect()
}

/// Routes registered for the entity group
#[must_use]
pub fn routes_methods(name: &EntityName) -> MethodTable {
    let EntityName {
        lowercase: low,
        capitalized: cap,
        lowercase_plural: low_pl,
        capitalized_plural: cap_pl,
    } = name;

    [
        MethodDescriptor::new("getAll", format!("Retrieve all {low_pl}."))
            .route(HttpMethod::Get, "", format!("getAll{cap_pl}")),
        MethodDescriptor::new("getById", format!("Retrieve a specific {low} by its ID."))
            .route(HttpMethod::Get, "/{id}", format!("get{cap}ById")),
        MethodDescriptor::new("create", format!("Create a new {low}."))
            .route(HttpMethod::Post, "", format!("create{cap}")),
        MethodDescriptor::new("update", format!("Modify an existing {low} by its ID."))
            .route(HttpMethod::Put, "/{id}", format!("update{cap}")),
        MethodDescriptor::new("delete", format!("Delete a specific {low} by its ID."))
            .route(HttpMethod::Delete, "/{id}", format!("delete{cap}")),
    ]
    .into_iter()
    .collect()
}
