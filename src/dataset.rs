//! Static table of resolved developer-support tickets.

use crate::types::TicketRecord;

/// A row of the static ticket table.
#[derive(Debug, Clone, Copy)]
pub struct TicketRow {
    pub ticket_id: &'static str,
    pub customer_id: &'static str,
    pub request: &'static str,
    pub category: &'static str,
    pub suggested_solution: &'static str,
}

impl TicketRow {
    /// Convert this row into an owned ticket record.
    pub fn to_record(&self) -> TicketRecord {
        TicketRecord::new(
            self.ticket_id,
            self.customer_id,
            self.request,
            self.category,
            self.suggested_solution,
        )
    }
}

/// Resolved tickets, in the order they are written to the dataset.
pub static RESOLVED_TICKETS: &[TicketRow] = &[
    TicketRow {
        ticket_id: "ADK-101",
        customer_id: "DEV-101",
        request: "How do I make my agents call each other in a specific, multi-step sequence? My main agent just stops after the first step.",
        category: "Core Concepts",
        suggested_solution: "The best practice is to use a strong, sequential prompt for the orchestrator agent. List the tools/sub-agents to be called in order (e.g., Step A, Step B, Step C) and ensure the orchestrator's logic checks the state after each step to decide the next action.",
    },
    TicketRow {
        ticket_id: "ADK-102",
        customer_id: "DEV-102",
        request: "What is the best way to handle different types of user queries, like greetings vs actual support tickets?",
        category: "Core Concepts",
        suggested_solution: "Implement a 'gatekeeper' or 'intent analysis' pattern in your main orchestrator's prompt. Instruct the agent to first classify the user's intent. If it's a simple conversation, it should answer directly. If it's a technical issue, it should trigger the full tool-calling workflow.",
    },
    TicketRow {
        ticket_id: "ADK-103",
        customer_id: "DEV-103",
        request: "How should I pass data between different sub-agents in my workflow?",
        category: "State Management",
        suggested_solution: "The orchestrator should manage the data flow. The best pattern is for a sub-agent to return its full result (e.g., a JSON string), which the orchestrator then receives. The orchestrator's reasoning process can then parse this result and pass only the relevant pieces of data as arguments to the next sub-agent in the sequence.",
    },
    TicketRow {
        ticket_id: "ADK-104",
        customer_id: "DEV-115",
        request: "Can one agent call another agent directly without an orchestrator?",
        category: "Core Concepts",
        suggested_solution: "While technically possible by defining one agent as a tool for another, it is not the recommended pattern. Using a central orchestrator provides better state management, error handling, and clearer logic flow for complex multi-agent systems.",
    },
    TicketRow {
        ticket_id: "ADK-105",
        customer_id: "DEV-121",
        request: "What's the difference between `LlmAgent` and the base `Agent` class?",
        category: "Core Concepts",
        suggested_solution: "The base `Agent` class provides maximum flexibility and is ideal for complex agents that require custom logic for session management or tool configuration via `start_session` and `infer_tool_config` overrides. `LlmAgent` is a more concise and convenient subclass for simpler agents whose primary role is to call tools based on their prompt, as it handles much of the boilerplate automatically.",
    },
    TicketRow {
        ticket_id: "ADK-201",
        customer_id: "DEV-201",
        request: "How do I define a tool that takes multiple arguments?",
        category: "Tool Definition",
        suggested_solution: "Define your Python function with standard type-hinted arguments (e.g., `def my_tool(name: str, count: int) -> str:`). The ADK automatically generates the correct OpenAPI schema for the LLM from these type hints. The LLM will then populate the arguments as a dictionary when it calls the tool.",
    },
    TicketRow {
        ticket_id: "ADK-202",
        customer_id: "DEV-210",
        request: "My agent isn't calling my custom tool. What should I check?",
        category: "Tool Definition",
        suggested_solution: "First, ensure the tool is correctly included in the `tools` list when you instantiate your agent. Second, check your agent's prompt; it must clearly describe what the tool does and provide instructions on when the agent should use it. If the prompt is ambiguous, the agent may not know when to call the tool.",
    },
    TicketRow {
        ticket_id: "ADK-203",
        customer_id: "DEV-211",
        request: "Is it possible to integrate with an external API like Stripe or Twilio?",
        category: "Tool Definition",
        suggested_solution: "Yes. The standard way is to write a custom Python function tool that acts as a client for the external API. For example, a `send_sms` tool would import the Twilio Python library, initialize the client with your API keys (loaded from environment variables), and then make the necessary API call within the function body.",
    },
    TicketRow {
        ticket_id: "ADK-204",
        customer_id: "DEV-215",
        request: "How do I use the `MCPToolset` to connect to an external tool server?",
        category: "Tool Definition",
        suggested_solution: "You must instantiate `MCPToolset` with the server's address (e.g., 'localhost:50051') and then pass this instance to your agent using the `toolsets` parameter: `my_agent = Agent(toolsets=[mcp_toolset])`. Ensure this is done in an `async` context.",
    },
    TicketRow {
        ticket_id: "ADK-301",
        customer_id: "DEV-303",
        request: "How do I access the user's entire conversation history inside a tool?",
        category: "State Management",
        suggested_solution: "You cannot directly access the full `conversation_history` inside a tool function. The `ToolContext` passed to tools only contains the session `state`. The correct pattern is to have the agent's prompt instruct the LLM to pass relevant information from the conversation history as an argument to the tool call.",
    },
    TicketRow {
        ticket_id: "ADK-302",
        customer_id: "DEV-308",
        request: "Is the session state persistent? If my app restarts, is the data still there?",
        category: "State Management",
        suggested_solution: "The default `InMemorySessionService` does not persist state across application restarts. For persistence, you must implement your own `SessionService` that connects to a durable backend like Firestore, Redis, or a SQL database. The ADK is designed to be pluggable in this way.",
    },
    TicketRow {
        ticket_id: "ADK-303",
        customer_id: "DEV-310",
        request: "How can I clear the session state for a user to start over?",
        category: "State Management",
        suggested_solution: "Using the `adk web` interface, you can start a new session by clicking the 'New Session' button, which clears the state. Programmatically, you would call the `session_service.delete_session()` method to remove the session data from your backend.",
    },
    TicketRow {
        ticket_id: "ADK-401",
        customer_id: "DEV-401",
        request: "My deployment is failing with a 403 Permission Denied error when trying to deploy my agent to Vertex AI.",
        category: "Deployment",
        suggested_solution: "A 403 error on deployment almost always indicates an IAM permission issue. Ensure that the service account being used for deployment has the 'Vertex AI Admin' and 'Service Account User' roles. Also, check that the specific APIs, like AI Platform API and Cloud Storage API, are enabled in your GCP project.",
    },
    TicketRow {
        ticket_id: "ADK-402",
        customer_id: "DEV-402",
        request: "My agent is failing with a 404 NOT_FOUND error for a model like `gemini-2.5-pro`.",
        category: "Configuration",
        suggested_solution: "A `404 NOT_FOUND` error for a model means the model name is either incorrect or not available in your specified GCP project and region. Check the official Google Cloud documentation for valid, available model names for your location and update your agent definitions accordingly.",
    },
    TicketRow {
        ticket_id: "ADK-403",
        customer_id: "DEV-405",
        request: "How do I pass environment variables like API keys to my deployed Agent Engine agent?",
        category: "Deployment",
        suggested_solution: "When using `agent_engines.create()` from the `vertexai` library, you can pass a dictionary of environment variables to the `env_vars` parameter. The deployment script should load these values from a local `.env` file and pass them into the creation call.",
    },
    TicketRow {
        ticket_id: "ADK-404",
        customer_id: "DEV-409",
        request: "My Cloud Run deployment fails with a 'Visibility check was unavailable' error.",
        category: "Deployment",
        suggested_solution: "This specific error means the Cloud Build service account does not have permission to act as the Cloud Run service agent. You need to run a `gcloud iam service-accounts add-iam-policy-binding` command to grant the `roles/iam.serviceAccountUser` role to your project's Cloud Build service account for the Cloud Run service agent.",
    },
    TicketRow {
        ticket_id: "ADK-501",
        customer_id: "DEV-501",
        request: "My `before_agent_callback` is throwing an `AttributeError: 'CallbackContext' object has no attribute 'conversation_history'`.",
        category: "Callbacks",
        suggested_solution: "This happens because the `before_agent_callback` receives a lightweight `CallbackContext` which only contains the `state`, not the full `conversation_history`. If you need to access the user's initial query to initialize state, it is more reliable to create a dedicated 'intake' tool that the agent calls as its very first action.",
    },
    TicketRow {
        ticket_id: "ADK-502",
        customer_id: "DEV-502",
        request: "My callback function `my_func(ctx)` is failing with a `TypeError` about an unexpected keyword argument `callback_context`.",
        category: "Callbacks",
        suggested_solution: "This `TypeError` means the parameter name in your function definition does not match what the ADK framework provides. You must rename your function's parameter to match the framework's keyword. For `before_agent_callback`, the correct signature is `def my_func(callback_context: InvocationContext):`.",
    },
    TicketRow {
        ticket_id: "ADK-601",
        customer_id: "DEV-601",
        request: "My RAG tool is failing with a Python error: `TypeError: 'RagContexts' object is not iterable`.",
        category: "RAG & Data",
        suggested_solution: "This error occurs when you incorrectly try to iterate over the main response object from the `vertexai.rag.retrieval_query` function. The correct way to access the retrieved documents is to iterate over the `.contexts` attribute of the response object, like so: `for ctx in response.contexts:`.",
    },
    TicketRow {
        ticket_id: "ADK-602",
        customer_id: "DEV-605",
        request: "I'm getting a `400 INVALID_ARGUMENT` error saying 'Multiple tools are supported only when they are all search tools'.",
        category: "Tool Definition",
        suggested_solution: "The Google API has a constraint that does not allow mixing the built-in `VertexAiRagRetrieval` tool with other custom Python function tools within the same agent's tool list. The correct pattern is to isolate `VertexAiRagRetrieval` in its own dedicated sub-agent, and then have an orchestrator call that sub-agent as part of a larger workflow.",
    },
    TicketRow {
        ticket_id: "ADK-603",
        customer_id: "DEV-610",
        request: "My BigQuery tool is failing with a `400 Unrecognized name: request` error from the database.",
        category: "Tool Definition",
        suggested_solution: "This is a standard SQL error caused by column name ambiguity, especially in a `WHERE` clause. The most robust fix is to assign an alias to your table in the `FROM` clause (e.g., `FROM my_dataset.my_table AS t`) and then qualify all column references with that alias (e.g., `WHERE t.column_name = ...`).",
    },
    TicketRow {
        ticket_id: "ADK-604",
        customer_id: "DEV-611",
        request: "My `setup_rag.py` script fails with an `Unknown field for ImportRagFilesResponse: name` error.",
        category: "RAG & Data",
        suggested_solution: "This error indicates an SDK version mismatch or incorrect usage of the import job object. The `rag.import_files()` function returns an operation reference. You must capture this object, get its `.name` attribute, and then use that name to poll the `rag.get_import_job()` function to get the status.",
    },
    TicketRow {
        ticket_id: "ADK-701",
        customer_id: "DEV-701",
        request: "My app is crashing with `ModuleNotFoundError: No module named 'llama_index'` when I try to use the RAG tool.",
        category: "Dependencies / Setup",
        suggested_solution: "The ADK's built-in `VertexAiRagRetrieval` tool has a peer dependency on `llama-index`. To fix this, you must explicitly add `llama-index` to your `pyproject.toml` file and then run `poetry install` to update your environment.",
    },
    TicketRow {
        ticket_id: "ADK-702",
        customer_id: "DEV-705",
        request: "What is the purpose of the `pyproject.toml` file?",
        category: "Dependencies / Setup",
        suggested_solution: "The `pyproject.toml` file is the modern standard for configuring Python projects. It is used by `poetry` to manage all project dependencies, metadata (like name and version), and build settings, replacing older files like `setup.py` and `requirements.txt`.",
    },
    TicketRow {
        ticket_id: "ADK-110",
        customer_id: "DEV-130",
        request: "How do I create a streaming response from my agent?",
        category: "Core Concepts",
        suggested_solution: "To enable streaming, you must use an agent that supports it and call the `.stream()` or `.stream_async()` method from your runner. The ADK framework will then yield events as they are generated by the LLM and tools, which you can process in real-time on the client side.",
    },
    TicketRow {
        ticket_id: "ADK-220",
        customer_id: "DEV-225",
        request: "Can a tool return a complex object, or just a string?",
        category: "Tool Definition",
        suggested_solution: "A tool function should return a JSON-serializable type. This can be a string, a number, a boolean, or a dictionary/list containing these types. For complex data, structure it as a dictionary. The ADK will serialize this to a JSON string before passing it back to the LLM in the conversation history.",
    },
    TicketRow {
        ticket_id: "ADK-310",
        customer_id: "DEV-320",
        request: "What's the best way to handle API keys for tools?",
        category: "Configuration",
        suggested_solution: "Never hardcode API keys in your tool's source code. The best practice is to store them in environment variables. Use a `.env` file for local development and load them using a library like `python-dotenv`. For deployed agents, configure the environment variables directly in the deployment service (e.g., Agent Engine's `env_vars` or Cloud Run's environment settings).",
    },
    TicketRow {
        ticket_id: "ADK-410",
        customer_id: "DEV-415",
        request: "My Agent Engine deployment is slow. How can I speed it up?",
        category: "Deployment",
        suggested_solution: "Agent Engine deployment involves building a container, pushing it to a registry, and provisioning infrastructure, which can take several minutes. To speed up iteration, do most of your development and testing locally using `adk run` or `adk web`. Only deploy to Agent Engine when you need to test the final, cloud-based version.",
    },
    TicketRow {
        ticket_id: "ADK-510",
        customer_id: "DEV-511",
        request: "Can I use a callback to stop a tool call from executing?",
        category: "Callbacks",
        suggested_solution: "Yes. In a `before_tool_callback`, you can return a dictionary. This will cause the ADK to skip the actual tool execution and immediately use the dictionary you returned as the 'tool output' for the LLM's next reasoning step. This is useful for implementing validation, caching, or mock responses.",
    },
    TicketRow {
        ticket_id: "ADK-620",
        customer_id: "DEV-622",
        request: "How do I choose the right chunk_size for my RAG documents?",
        category: "RAG & Data",
        suggested_solution: "Choosing the right `chunk_size` is a balance. Smaller chunks (e.g., 256-512 characters) provide more precise, targeted results but may lack context. Larger chunks (e.g., 1024-2048) provide better context but might include irrelevant information. For technical documentation, a larger chunk size (around 1024) is often better to keep code examples and their explanations together.",
    },
    TicketRow {
        ticket_id: "ADK-801",
        customer_id: "DEV-801",
        request: "How do I write an evaluation test for my agent?",
        category: "Evaluation",
        suggested_solution: "Create a JSON file with a list of test cases. Each case should have a `query` (the user input) and a `reference` (the ideal agent response). You can also include `expected_tool_use` to verify that the correct tools are called with the right arguments. Then, use the `AgentEvaluator.evaluate()` function from the ADK, pointing it to your agent module and your test data file.",
    },
    TicketRow {
        ticket_id: "ADK-802",
        customer_id: "DEV-802",
        request: "My evaluation `tool_trajectory_avg_score` is low. What does that mean?",
        category: "Evaluation",
        suggested_solution: "A low `tool_trajectory_avg_score` means your agent's actual tool calls did not match the `expected_tool_use` in your evaluation data. This could be because it called the wrong tool, called the right tool with the wrong arguments, or failed to call a tool when one was expected. Check your agent's prompt to ensure it has clear instructions for when to use each tool.",
    },
    TicketRow {
        ticket_id: "ADK-111",
        customer_id: "DEV-135",
        request: "Can an agent have no tools at all?",
        category: "Core Concepts",
        suggested_solution: "Yes, absolutely. An agent without any tools is essentially a conversational LLM with a specific persona and instruction set defined by its prompt. This is useful for creating chatbots, characters, or agents whose only purpose is to answer questions based on their initial prompt and conversation history.",
    },
    TicketRow {
        ticket_id: "ADK-221",
        customer_id: "DEV-230",
        request: "Is there a way to see the exact prompt being sent to the LLM during an `adk run`?",
        category: "Debugging",
        suggested_solution: "Yes. The ADK runner logs have different levels of verbosity. By default, it's concise, but you can increase the verbosity to see the full request sent to the LLM, including the system prompt, conversation history, and available tool definitions. Check the `adk run --help` command for logging options.",
    },
    TicketRow {
        ticket_id: "ADK-311",
        customer_id: "DEV-325",
        request: "If I update `tool_context.state`, is that change immediately available to other concurrent users?",
        category: "State Management",
        suggested_solution: "No. The session state is isolated to a specific session ID, which is typically tied to a single user's conversation. Changes made to the state in one user's session will not be visible to another user in a different session.",
    },
    TicketRow {
        ticket_id: "ADK-411",
        customer_id: "DEV-420",
        request: "Does the ADK deployment to Agent Engine support custom domains?",
        category: "Deployment",
        suggested_solution: "The Vertex AI Agent Engine provides a default URL for your deployed agent. Mapping this to a custom domain is not a direct feature of the ADK deployment script itself but would be handled at the Google Cloud infrastructure level, typically by using a Load Balancer (like Cloud Load Balancing) in front of the Agent Engine endpoint and configuring your DNS records accordingly.",
    },
    TicketRow {
        ticket_id: "ADK-511",
        customer_id: "DEV-515",
        request: "Can an `after_tool_callback` modify the result of a tool before the LLM sees it?",
        category: "Callbacks",
        suggested_solution: "Yes. The `after_tool_callback` receives the `tool_response` as an argument. You can modify this dictionary within the callback and return the modified version. This new dictionary will then be used as the tool's output in the conversation history, allowing you to sanitize, enrich, or reformat tool results before the agent reasons about them.",
    },
    TicketRow {
        ticket_id: "ADK-621",
        customer_id: "DEV-625",
        request: "What happens if my RAG search returns no relevant documents?",
        category: "RAG & Data",
        suggested_solution: "If the `VertexAiRagRetrieval` tool finds no documents that meet the similarity threshold, it will return an empty result. Your orchestrator agent's prompt should be designed to handle this gracefully. It can either inform the user that no relevant documentation was found or proceed with the workflow using only the information from other sources, like the BigQuery database.",
    },
    TicketRow {
        ticket_id: "ADK-803",
        customer_id: "DEV-805",
        request: "What is the `response_match_score` in the evaluation results?",
        category: "Evaluation",
        suggested_solution: "The `response_match_score` measures the semantic similarity between the agent's final text response and the `reference` answer you provided in your test case. It uses a language model to score how closely the meaning and content of the two texts align. A high score means the agent's answer was very similar in meaning to the ideal answer.",
    },
    TicketRow {
        ticket_id: "ADK-901",
        customer_id: "DEV-901",
        request: "How do I handle binary data, like images or audio, with ADK tools?",
        category: "Tool Definition",
        suggested_solution: "Tools should not return raw binary data directly. The recommended pattern is to have the tool save the binary data to a persistent location (like Google Cloud Storage) and return a reference to it, such as the GCS URI (`gs://...`). The agent or a client application can then use this URI to access the file.",
    },
    TicketRow {
        ticket_id: "ADK-112",
        customer_id: "DEV-140",
        request: "What's the best practice for managing long and complex prompts?",
        category: "Core Concepts",
        suggested_solution: "For maintainability, store long prompts in a dedicated `prompts.py` file within your agent's package. Use Python's triple-quoted strings to write multi-line prompts. You can also use f-strings to dynamically insert information, like a database schema or the current date, into the prompt before the agent is run.",
    },
    TicketRow {
        ticket_id: "ADK-222",
        customer_id: "DEV-240",
        request: "My tool uses an SDK that requires initialization (e.g., `boto3.client('s3')`). Where should I do this?",
        category: "Tool Definition",
        suggested_solution: "Avoid initializing clients inside the tool function itself, as it's inefficient to do so on every call. A better pattern is to initialize the client once at the module level (outside the function definition) in your `tools.py` file. This creates a shared client instance that can be reused across all calls to the tool.",
    },
    TicketRow {
        ticket_id: "ADK-312",
        customer_id: "DEV-330",
        request: "How can I store a complex Python object in the state?",
        category: "State Management",
        suggested_solution: "The session state must be JSON-serializable. If you have a custom Python object (e.g., a Pydantic model or a dataclass), you must first convert it to a dictionary (`.model_dump()` for Pydantic) or a JSON string (`json.dumps()`) before saving it to `tool_context.state`. When you read it back, you'll need to parse the JSON and reconstruct your object.",
    },
    TicketRow {
        ticket_id: "ADK-412",
        customer_id: "DEV-430",
        request: "How can I check the logs for my deployed Agent Engine agent?",
        category: "Deployment",
        suggested_solution: "You can view the logs for a deployed Vertex AI Agent Engine instance by navigating to the Vertex AI section of the Google Cloud Console. Find your Reasoning Engine, and there should be a 'Logs' tab that integrates with Cloud Logging, showing the output and any errors from your agent's execution.",
    },
    TicketRow {
        ticket_id: "ADK-622",
        customer_id: "DEV-630",
        request: "My vector search is returning irrelevant results. How can I improve it?",
        category: "RAG & Data",
        suggested_solution: "First, ensure your query is specific and keyword-rich, as we do in the `knowledge_retrieval_agent`. Second, check your distance threshold; a lower threshold (e.g., 0.4) will be stricter and return only very close matches. Third, and most importantly, ensure the data you embedded is clean and high-quality. The quality of your source documents is the biggest factor in search relevance.",
    },
    TicketRow {
        ticket_id: "ADK-113",
        customer_id: "DEV-145",
        request: "How can I make my agent remember things from previous conversations?",
        category: "State Management",
        suggested_solution: "This requires a persistent `SessionService`. By default, ADK uses an in-memory service that is cleared on restart. To achieve long-term memory, you need to create a custom class that implements the `SessionService` interface and uses a database like Firestore or Redis to `create_session`, `get_session`, `update_session`, and `delete_session`.",
    },
    TicketRow {
        ticket_id: "ADK-223",
        customer_id: "DEV-245",
        request: "Is there a way to stream a tool's output back to the user as it's being generated?",
        category: "Tool Definition",
        suggested_solution: "Direct streaming from a tool is an advanced use case not supported out-of-the-box. The standard flow is that a tool completes its execution and returns a final result. To achieve a streaming-like effect, the tool would need to save its progress intermittently to a shared resource (like a Firestore document or a Pub/Sub topic) that the client application is listening to, while the agent waits for the final result.",
    },
    TicketRow {
        ticket_id: "ADK-804",
        customer_id: "DEV-810",
        request: "Can I evaluate just one part of my multi-agent system?",
        category: "Evaluation",
        suggested_solution: "Yes. The `AgentEvaluator` takes an `agent_module` as its target. You can point it directly at a sub-agent's module path (e.g., `adk_copilot.sub_agents.problem_solver`) and provide a test data set tailored specifically to that sub-agent's inputs and expected outputs. This is a great way to test your specialist agents in isolation.",
    },
    TicketRow {
        ticket_id: "ADK-902",
        customer_id: "DEV-905",
        request: "How does ADK handle authentication for Google Cloud tools like BigQuery?",
        category: "Authentication",
        suggested_solution: "ADK uses Application Default Credentials (ADC). When running locally, it will use the credentials you configured with `gcloud auth application-default login`. When deployed on Google Cloud (like Agent Engine or Cloud Run), it automatically uses the service account associated with that resource. You must ensure this service account has the necessary IAM roles (e.g., 'BigQuery User').",
    },
    TicketRow {
        ticket_id: "ADK-114",
        customer_id: "DEV-150",
        request: "Can I change the LLM's temperature or other generation parameters?",
        category: "Configuration",
        suggested_solution: "Yes. When you instantiate your agent (e.g., `LlmAgent`), you can pass a `generate_content_config` object. For example: `config = GenerationConfig(temperature=0.9); agent = LlmAgent(model='...', generate_content_config=config)`.",
    },
    TicketRow {
        ticket_id: "ADK-224",
        customer_id: "DEV-250",
        request: "How do I define a tool with optional parameters?",
        category: "Tool Definition",
        suggested_solution: "Use Python's `Optional` type hint and provide a default value of `None`. For example: `def my_tool(required_arg: str, optional_arg: Optional[int] = None) -> str:`. The ADK will correctly generate a schema where `required_arg` is required and `optional_arg` is not. The LLM will only provide the argument if it's relevant.",
    },
    TicketRow {
        ticket_id: "ADK-313",
        customer_id: "DEV-335",
        request: "What is the difference between `tool_context.state` and `session.state`?",
        category: "State Management",
        suggested_solution: "They generally refer to the same underlying state dictionary for a given session. `tool_context.state` is the property you use to access and modify the state from within a tool function. `session.state` is used when you are interacting with the session object directly, for instance in a custom runner or an external application managing the session lifecycle.",
    },
    TicketRow {
        ticket_id: "ADK-413",
        customer_id: "DEV-435",
        request: "My deployment fails with a dependency conflict. How do I resolve this?",
        category: "Dependencies / Setup",
        suggested_solution: "This is a common issue with complex Python projects. First, run `poetry lock` to see if Poetry can resolve the conflict automatically. If not, examine the error message to see which two packages require different versions of a third package. You may need to manually adjust the version constraints in your `pyproject.toml` (e.g., change `^1.0` to `~1.2`) to find a compatible set of versions. Running `poetry show` can help you visualize the dependency tree.",
    },
    TicketRow {
        ticket_id: "ADK-623",
        customer_id: "DEV-635",
        request: "Can the RAG tool search across multiple PDF files at once?",
        category: "RAG & Data",
        suggested_solution: "Yes. When you set up the `VertexAiRagRetrieval` tool, you provide it with a `rag_corpus` resource name. That corpus can have many files imported into it. When you call the tool with a query, the RAG engine will perform a vector search across all the chunks from all the files within that single corpus and return the most relevant results regardless of which source file they came from.",
    },
    TicketRow {
        ticket_id: "ADK-805",
        customer_id: "DEV-815",
        request: "How can I test an agent that asks for user confirmation, like the two-step code generator?",
        category: "Evaluation",
        suggested_solution: "This is challenging for fully automated evaluation. The standard `AgentEvaluator` is best for single-shot interactions. To test a multi-turn flow, you would typically write a custom Python script using `pytest`. Your script would first send the initial request, then use an `assert` to check that the agent's response is the expected confirmation question. Then, your script would send the 'yes' confirmation and assert that the final response contains the generated code.",
    },
    TicketRow {
        ticket_id: "ADK-903",
        customer_id: "DEV-910",
        request: "Is there a way to add a tool to an agent after it has been initialized?",
        category: "Core Concepts",
        suggested_solution: "No, the set of tools an agent can use is fixed at instantiation time via the `tools` or `toolsets` parameter. This is because the tool definitions are sent to the LLM as part of the system prompt to enable its reasoning. To change an agent's tools, you would need to create a new agent instance with the updated tool list.",
    },
];

/// All resolved tickets as owned records.
pub fn resolved_tickets() -> Vec<TicketRecord> {
    RESOLVED_TICKETS.iter().map(TicketRow::to_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ticket_ids_are_unique() {
        let ids: HashSet<_> = RESOLVED_TICKETS.iter().map(|t| t.ticket_id).collect();
        assert_eq!(ids.len(), RESOLVED_TICKETS.len());
    }

    #[test]
    fn test_rows_have_text() {
        for row in RESOLVED_TICKETS {
            assert!(row.ticket_id.starts_with("ADK-"), "{}", row.ticket_id);
            assert!(row.customer_id.starts_with("DEV-"), "{}", row.customer_id);
            assert!(!row.request.trim().is_empty(), "{} has no request", row.ticket_id);
            assert!(!row.category.is_empty());
            assert!(!row.suggested_solution.is_empty());
        }
    }

    #[test]
    fn test_resolved_tickets_keep_order() {
        let records = resolved_tickets();
        assert_eq!(records.len(), RESOLVED_TICKETS.len());
        assert_eq!(records[0].ticket_id, "ADK-101");
        assert_eq!(
            records.last().map(|r| r.ticket_id.as_str()),
            RESOLVED_TICKETS.last().map(|r| r.ticket_id)
        );
    }
}
