//! End-to-end generation: syntax tree in, TypeScript files out.

use dtogen_codegen::{
    EntityPerClassOutputWriter, KebabCaseFileNameGenerator, OutputFile, OutputFilesProcessor,
    PrependAutogeneratedNotice, SingleFileOutputWriter, TypeResolverChain,
};
use dtogen_codegen_typescript::{
    AppendCollectionResponseFileProcessor, ClassNameTypeResolver, CollectionResponseTypeResolver,
    DateTimeTypeResolver, TypeScriptGenerator, TypeScriptImportGenerator, TypeScriptTypeResolver,
};
use dtogen_convert::{ControllerVisitor, Converter, DtoVisitor, MarkerFilter, ResourceVisitor};
use dtogen_ir::ConverterResult;
use dtogen_syntax::{Declaration, Marker, MarkerValue, Method, Param, Property, SourceUnit, TypeNode};

fn resolver() -> TypeScriptTypeResolver {
    TypeScriptTypeResolver::new(
        TypeResolverChain::new()
            .with(DateTimeTypeResolver)
            .with(CollectionResponseTypeResolver::default())
            .with(ClassNameTypeResolver),
    )
}

fn single_file() -> TypeScriptGenerator {
    TypeScriptGenerator::new(
        SingleFileOutputWriter::new("generated.ts", TypeScriptImportGenerator),
        resolver(),
    )
    .processors(
        OutputFilesProcessor::new()
            .with(AppendCollectionResponseFileProcessor)
            .with(PrependAutogeneratedNotice::new("//")),
    )
}

fn dto(name: &str) -> Declaration {
    Declaration::class(name).marker(Marker::new("Dto"))
}

fn prop(name: &str, ty: &str) -> Property {
    Property::new(name, Some(TypeNode::named(ty)))
}

fn convert(units: &[SourceUnit]) -> ConverterResult {
    Converter::new()
        .visitor(DtoVisitor::with_filter(MarkerFilter::new().dto("Dto")))
        .visitor(ControllerVisitor::new())
        .visitor(ResourceVisitor::new())
        .convert(units)
        .unwrap()
        .into_result()
}

#[test]
fn test_primitive_dto_single_file() {
    let unit = SourceUnit::new(vec![
        Declaration::class("U")
            .property(prop("id", "string"))
            .property(Property::new("name", Some(TypeNode::nullable("string")))),
    ]);
    let result = Converter::standard().convert([&unit]).unwrap().into_result();

    let files = single_file().generate(&result).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "generated.ts");
    insta::assert_snapshot!(&files[0].content, @r"
    // THE FILE WAS AUTOGENERATED USING DTOGEN. PLEASE DO NOT EDIT IT!

    export type U = {
      id: string;
      name: string | null;
    };
    ");
}

#[test]
fn test_controller_api_client() {
    let route = |path: &str, method: &str| {
        Marker::new("Route")
            .positional(MarkerValue::string(path))
            .named("methods", MarkerValue::list([MarkerValue::string(method)]))
    };
    let returns = |arg: &str, class: &str| Marker::new("DtoEndpoint").named(arg, MarkerValue::class(class));
    let input = |class: &str| Param::new("input", Some(TypeNode::named(class))).marker(Marker::new("Input"));

    let controller = Declaration::class("UserController")
        .method(
            Method::new("getUsers")
                .marker(route("/api/users", "GET"))
                .marker(returns("returnMany", "UserOutput")),
        )
        .method(
            Method::new("createUser")
                .marker(route("/api/users", "POST"))
                .marker(returns("returnOne", "UserOutput"))
                .param(input("CreateUserInput")),
        )
        .method(
            Method::new("updateUser")
                .marker(route("/api/users/{userToUpdate}", "PUT"))
                .marker(returns("returnOne", "UserOutput"))
                .param(Param::new("userToUpdate", Some(TypeNode::named("User"))))
                .param(input("UpdateUserInput")),
        )
        .method(
            Method::new("deleteUser")
                .marker(route("/api/users/{id}", "DELETE"))
                .param(Param::new("id", Some(TypeNode::named("int")))),
        );
    let dtos = vec![
        dto("UserOutput").property(prop("id", "string")),
        dto("CreateUserInput").property(prop("name", "string")),
        dto("UpdateUserInput").property(prop("name", "string")),
    ];

    let result = convert(&[SourceUnit::new(vec![controller]), SourceUnit::new(dtos)]);
    let files = single_file().generate(&result).unwrap();

    insta::assert_snapshot!(&files[0].content, @r"
    // THE FILE WAS AUTOGENERATED USING DTOGEN. PLEASE DO NOT EDIT IT!

    import axios from 'axios';

    export type UserOutput = {
      id: string;
    };

    export type CreateUserInput = {
      name: string;
    };

    export type UpdateUserInput = {
      name: string;
    };

    export const apiUsersGet = (): Promise<UserOutput[]> => {
      return axios
        .get<UserOutput[]>(`/api/users`)
        .then(response => response.data);
    }

    export const apiUsersPost = (body: CreateUserInput): Promise<UserOutput> => {
      return axios
        .post<UserOutput>(`/api/users`, body)
        .then(response => response.data);
    }

    export const apiUsersUserToUpdatePut = (userToUpdate: string, body: UpdateUserInput): Promise<UserOutput> => {
      return axios
        .put<UserOutput>(`/api/users/${userToUpdate}`, body)
        .then(response => response.data);
    }

    export const apiUsersIdDelete = (id: number): Promise<void> => {
      return axios
        .delete<void>(`/api/users/${id}`)
        .then(response => response.data);
    }
    ");
}

#[test]
fn test_query_params_are_one_argument() {
    let controller = Declaration::class("SearchController").method(
        Method::new("search")
            .marker(Marker::new("Route").positional(MarkerValue::string("/search")))
            .marker(Marker::new("DtoEndpoint").named("returnMany", MarkerValue::class("Hit")))
            .param(Param::new("filter", Some(TypeNode::named("SearchFilter"))).marker(Marker::new("Query"))),
    );
    let dtos = vec![
        dto("SearchFilter")
            .property(prop("term", "string"))
            .property(Property::new("page", Some(TypeNode::nullable("int")))),
        dto("Hit").property(prop("title", "string")),
    ];

    let result = convert(&[SourceUnit::new(dtos), SourceUnit::new(vec![controller])]);
    let files = single_file().generate(&result).unwrap();

    assert!(files[0].content.contains(
        "export const searchGet = (query: { term: string; page: number | null }): Promise<Hit[]> => {\n  return axios\n    .get<Hit[]>(`/search`, { params: query })\n"
    ));
}

#[test]
fn test_generic_output_instantiation() {
    let response = dto("Response")
        .doc("/**\n * @template T\n */")
        .property(Property::new("data", None).doc("/** @var T */"));
    let controller = Declaration::class("UserController")
        .method(
            Method::new("one")
                .doc("/**\n * @return Response<UserOutput>\n */")
                .marker(Marker::new("Route").positional(MarkerValue::string("/users/one"))),
        )
        .method(
            Method::new("many")
                .doc("/**\n * @return Response<UserOutput[]>\n */")
                .marker(Marker::new("Route").positional(MarkerValue::string("/users/many"))),
        );
    let units = [SourceUnit::new(vec![
        response,
        dto("UserOutput").property(prop("id", "string")),
        controller,
    ])];

    let result = convert(&units);
    let content = &single_file().generate(&result).unwrap()[0].content;

    assert!(content.contains("export type Response<T> = {\n  data: T;\n};\n"));
    assert!(content.contains("export const usersOneGet = (): Promise<Response<UserOutput>> => {"));
    assert!(content.contains("export const usersManyGet = (): Promise<Response<UserOutput[]>> => {"));
}

#[test]
fn test_unknown_type_fails_without_output() {
    let unit = SourceUnit::new(vec![
        dto("A")
            .property(prop("createdAt", "DateTimeImmutable"))
            .property(prop("b", "B")),
        Declaration::class("B"),
    ]);

    let result = convert(&[unit]);
    let err = single_file().generate(&result).unwrap_err();
    assert_eq!(err.to_string(), "type B is not supported, referenced from A");
}

#[test]
fn test_entity_per_class_imports() {
    let unit = SourceUnit::new(vec![
        dto("UserCreate")
            .property(prop("id", "string"))
            .property(Property::new("profile", Some(TypeNode::nullable("Profile")))),
        dto("FullName")
            .property(prop("firstName", "string"))
            .property(prop("lastName", "string")),
        dto("Profile")
            .property(Property::new(
                "name",
                Some(TypeNode::union(["FullName", "null", "string"])),
            ))
            .property(prop("age", "int")),
    ]);
    let result = convert(&[unit]);

    let names = KebabCaseFileNameGenerator::new(".ts");
    let generator = TypeScriptGenerator::new(
        EntityPerClassOutputWriter::new(names, TypeScriptImportGenerator),
        resolver(),
    );
    let files = generator.generate(&result).unwrap();

    assert_eq!(
        files,
        vec![
            OutputFile::new(
                "user-create.ts",
                "import { Profile } from './profile';\n\nexport type UserCreate = {\n  id: string;\n  profile: Profile | null;\n};\n",
            ),
            OutputFile::new(
                "full-name.ts",
                "export type FullName = {\n  firstName: string;\n  lastName: string;\n};\n",
            ),
            OutputFile::new(
                "profile.ts",
                "import { FullName } from './full-name';\n\nexport type Profile = {\n  name: FullName | null | string;\n  age: number;\n};\n",
            ),
        ]
    );
}

#[test]
fn test_resource_collection_response() {
    let chat = Declaration::class("Chat").marker(
        Marker::new("ApiResource")
            .named("collectionOperations", MarkerValue::list([MarkerValue::string("get")]))
            .named("itemOperations", MarkerValue::list([MarkerValue::string("get")]))
            .named("output", MarkerValue::class("ChatOutput")),
    );
    let unit = SourceUnit::new(vec![chat, dto("ChatOutput").property(prop("text", "string"))]);
    let result = convert(&[unit]);

    let content = &single_file().generate(&result).unwrap()[0].content;
    assert!(content.contains(
        "export const chatsGet = (): Promise<CollectionResponse<ChatOutput>> => {"
    ));
    assert!(content.contains("export const chatsIdGet = (id: string): Promise<ChatOutput> => {"));
    assert!(content.ends_with("'hydra:totalItems': number;\n  'hydra:view'?: {\n    '@id': string;\n    'hydra:first'?: string;\n    'hydra:last'?: string;\n    'hydra:next'?: string;\n    'hydra:previous'?: string;\n  };\n};\n"));
    assert_eq!(content.matches("export type CollectionResponse<Resource>").count(), 1);
}
