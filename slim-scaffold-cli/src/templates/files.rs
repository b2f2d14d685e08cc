//! Built-in template file contents
//!
//! Handlebars templates for the generated PHP sources. Every template receives
//! `entity_name`, `entities_name`, the fully qualified class names
//! (`model_class`, `interface_class`, `controller_class`) and the ordered
//! `methods` table.

/// Model class template
pub const MODEL_TEMPLATE: &str = r"<?php

namespace App\Models;

/**
 * Class {{entity_name}}Model
 *
 * Represents the model of {{lower entity_name}} in the database.
 *
 * @package App\Models
 */
class {{entity_name}}Model
{
{{#each methods}}

    /**
     * {{description}}
     *
{{#each params}}
     * @param {{param_type}} ${{name}} - {{description}}
{{/each}}
     * @return {{return_type}} - {{return_description}}
     */
    public function {{name}}({{#each params}}{{param_type}} ${{name}}{{#unless @last}}, {{/unless}}{{/each}})
    {
        // Logic for {{lower description}}
    }
{{/each}}
}
";

/// Controller class template
pub const CONTROLLER_TEMPLATE: &str = r"<?php

namespace App\Controllers;

use Psr\Http\Message\ResponseInterface as Response;
use Psr\Http\Message\ServerRequestInterface as Request;
use {{interface_class}};

/**
 * Class {{entity_name}}Controller
 *
 * Controller to manage requests related to {{lower entities_name}}.
 *
 * @package App\Controllers
 */
class {{entity_name}}Controller
{
    /**
     * @var {{entity_name}}RepositoryInterface {{entity_name}} repository.
     */
    protected ${{lower entity_name}}Repository;

    /**
     * {{entity_name}}Controller constructor.
     *
     * @param {{entity_name}}RepositoryInterface ${{lower entity_name}}Repository {{entity_name}} repository to use.
     */
    public function __construct({{entity_name}}RepositoryInterface ${{lower entity_name}}Repository)
    {
        $this->{{lower entity_name}}Repository = ${{lower entity_name}}Repository;
    }
{{#each methods}}

    /**
     * {{description}}
     *
{{#each params}}
     * @param {{param_type}} ${{name}} - {{description}}
{{/each}}
     *
     * @return {{return_type}} - {{return_description}}
     */
    public function {{name}}({{#each params}}{{param_type}} ${{name}}{{#unless @last}}, {{/unless}}{{/each}})
    {
{{body}}
    }
{{/each}}
}
";

/// Repository interface template
pub const REPOSITORY_INTERFACE_TEMPLATE: &str = r"<?php

namespace App\Repositories;

/**
 * Interface {{entity_name}}RepositoryInterface
 *
 * @package App\Repositories
 */
interface {{entity_name}}RepositoryInterface
{
{{#each methods}}

    /**
     * {{description}}
     *
{{#each params}}
     * @param {{param_type}} ${{name}} - {{description}}
{{/each}}
     * @return {{return_type}} - {{return_description}}
     */
    public function {{name}}({{#each params}}{{param_type}} ${{name}}{{#unless @last}}, {{/unless}}{{/each}});
{{/each}}
}
";

/// Database repository class template
pub const REPOSITORY_TEMPLATE: &str = r"<?php

namespace App\Repositories;

use {{model_class}};

/**
 * Class Db{{entity_name}}Repository
 *
 * Implements the {{entity_name}}RepositoryInterface interface using a {{lower entity_name}} model.
 *
 * @package App\Repositories
 */
class Db{{entity_name}}Repository implements {{entity_name}}RepositoryInterface
{
    /**
     * @var {{entity_name}}Model The {{lower entity_name}} model used by the repository.
     */
    protected ${{lower entity_name}}Model;

    /**
     * Db{{entity_name}}Repository constructor.
     *
     * @param {{entity_name}}Model ${{lower entity_name}}Model The {{lower entity_name}} model to be used.
     */
    public function __construct({{entity_name}}Model ${{lower entity_name}}Model)
    {
        $this->{{lower entity_name}}Model = ${{lower entity_name}}Model;
    }
{{#each methods}}

    /**
     * {{description}}
     *
{{#each params}}
     * @param {{param_type}} ${{name}} - {{description}}
{{/each}}
     *
     * @return {{return_type}} - {{return_description}}
     */
    public function {{name}}({{#each params}}{{param_type}} ${{name}}{{#unless @last}}, {{/unless}}{{/each}})
    {
{{body}}
    }
{{/each}}
}
";

/// Routes file template
pub const ROUTES_TEMPLATE: &str = r"<?php

use Slim\Routing\RouteCollectorProxy;
use {{controller_class}};

/**
 * File of routes related to {{lower entities_name}}.
 *
 * This file defines the routes for managing {{lower entities_name}} in the application.
 *
 * @param \Slim\App $app Instance of the Slim application.
 */

return function ($app) {
    $app->group('/api/{{lower entities_name}}', function (RouteCollectorProxy $group) {
{{#each methods}}

        /**
         * {{description}}
         *
         * @method {{route.http_method}}
         * @endpoint /api/{{lower @root.entities_name}}{{route.endpoint}}
         */
        $group->{{lower route.http_method}}('{{route.endpoint}}', {{@root.entity_name}}Controller::class . ':{{route.controller_method}}');
{{/each}}
    });
};
";
